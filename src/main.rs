use subrip::processor::{self, ProcessOpts};

use std::io::{self, BufWriter, Read, Write};
use std::process::ExitCode;

use anyhow::{anyhow, Context, Result};
use clap::Parser as ClapParser;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("An error occurred: {}", err);
            for cause in err.chain().skip(1) {
                eprintln!("    {}", cause);
            }
            ExitCode::FAILURE
        }
    }
}

#[derive(ClapParser)]
#[command(about = "Parse, clean and rewrite SRT subtitles")]
struct Cli {
    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "The file to read from. If not supplied, the subtitles will be read from standard input.",
        default_value = "-"
    )]
    input: String,
    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "The file to write to. If not supplied, the subtitles will be written to standard output.",
        default_value = "-"
    )]
    output: String,
    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "Write a backup of the original input to the specified file."
    )]
    backup: Option<String>,
    #[arg(
        short,
        long,
        value_name = "TEXT",
        help = "Insert the given text into the leader subtitle."
    )]
    leader_text: Option<String>,
    #[arg(
        short,
        long,
        value_name = "REGEX",
        help = "Drop subtitles with a caption line matching this pattern. May be repeated."
    )]
    drop_pattern: Vec<String>,
    #[arg(
        long,
        value_name = "FILE",
        help = "Read drop patterns from a file, one per line. Lines starting with '#' are ignored."
    )]
    drop_file: Option<String>,
    #[arg(short, long, help = "Renumber the subtitles starting from 1.")]
    renumber: bool,
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let data = if cli.input == "-" {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read from stdin")?;
        buffer
    } else {
        std::fs::read_to_string(&cli.input)
            .context(format!("Failed to open input file: '{}'", cli.input))?
    };

    if let Some(backup_path) = &cli.backup {
        std::fs::write(backup_path, &data)
            .context(format!("Failed to write backup file: '{}'", backup_path))?;
    }

    let subs = subrip::parse_text(&data)
        .context(format!("Failed to parse SRT file: '{}'", cli.input))?;
    if subs.is_empty() {
        return Err(anyhow!("You appear to have supplied an empty file."));
    }

    let opts = process_opts(&cli)?;
    let subs = processor::process(subs, &opts);

    if cli.output == "-" {
        let mut dst = BufWriter::new(io::stdout().lock());
        subrip::write_subs(&mut dst, &subs).context("Failed to write to stdout.")?;
        dst.flush().context("Failed to write to stdout.")?;
    } else {
        let file = std::fs::File::create(&cli.output)
            .context(format!("Failed to create output file: '{}'", cli.output))?;
        let mut dst = BufWriter::new(file);
        subrip::write_subs(&mut dst, &subs).context("Failed to write to output file.")?;
        dst.flush().context("Failed to write to output file.")?;
    }

    Ok(())
}

fn process_opts(cli: &Cli) -> Result<ProcessOpts> {
    let mut drop_patterns = cli
        .drop_pattern
        .iter()
        .map(|p| processor::compile_pattern(p))
        .collect::<Result<Vec<_>>>()?;
    if let Some(path) = &cli.drop_file {
        let patterns = std::fs::read_to_string(path)
            .context(format!("Failed to read pattern file: '{}'", path))?;
        drop_patterns.extend(processor::load_patterns(&patterns)?);
    }

    Ok(ProcessOpts {
        leader_text: cli.leader_text.clone(),
        drop_patterns,
        renumber: cli.renumber,
    })
}
