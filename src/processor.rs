use crate::srt::{Subtitle, Timestamp};

use std::time::Duration;

use anyhow::{Context, Result};
use log::{debug, info};
use regex::Regex;

const LEADER_MAX: Timestamp = Timestamp::new(0, 0, 5, 0);

#[derive(Debug, Default)]
pub struct ProcessOpts {
    pub leader_text: Option<String>,
    pub drop_patterns: Vec<Regex>,
    pub renumber: bool,
}

pub fn process(subs: Vec<Subtitle>, opts: &ProcessOpts) -> Vec<Subtitle> {
    let subs = drop_matching(subs, &opts.drop_patterns);
    let subs = match &opts.leader_text {
        Some(text) => insert_leader(subs, text),
        None => subs,
    };
    if opts.renumber {
        renumber(subs)
    } else {
        subs
    }
}

/// Inserts a subtitle showing `text` from the start of the video until the
/// first subtitle appears, for at most five seconds. The leader is numbered
/// one below the first subtitle.
pub fn insert_leader(mut subs: Vec<Subtitle>, text: &str) -> Vec<Subtitle> {
    if let Some(first_sub) = subs.first() {
        let hide_at = first_sub.start.min(LEADER_MAX);
        if Duration::from(hide_at).as_secs() > 0 {
            info!("Inserting leader subtitle until {}", hide_at);
            let leader = Subtitle {
                index: first_sub.index.saturating_sub(1),
                start: Timestamp::default(),
                end: hide_at,
                caption: text.to_string(),
            };
            subs.insert(0, leader);
        }
    }
    subs
}

/// Removes every subtitle with a caption line matching one of `patterns`.
pub fn drop_matching(subs: Vec<Subtitle>, patterns: &[Regex]) -> Vec<Subtitle> {
    if patterns.is_empty() {
        return subs;
    }
    subs.into_iter()
        .filter(|sub| !patterns.iter().any(|r| is_match(r, sub)))
        .collect()
}

fn is_match(regex: &Regex, subtitle: &Subtitle) -> bool {
    subtitle.caption_lines().any(|line| {
        let mtch = regex.is_match(line);
        if mtch {
            info!(
                "Dropping subtitle {}: \"{}\" matched /{}/",
                subtitle.index, line, regex
            );
        }
        mtch
    })
}

/// Reads one pattern per line. Blank lines and `#` comments are skipped.
pub fn load_patterns(patterns: &str) -> Result<Vec<Regex>> {
    let patterns = patterns
        .lines()
        .map(str::trim_start)
        .filter(|p| !p.is_empty() && !p.starts_with('#'));
    patterns.map(compile_pattern).collect()
}

pub fn compile_pattern(pattern: &str) -> Result<Regex> {
    debug!("Compiling drop pattern /{}/", pattern);
    Regex::new(pattern).with_context(|| format!("Invalid regex: '{}'", pattern))
}

pub fn renumber(subs: Vec<Subtitle>) -> Vec<Subtitle> {
    subs.into_iter()
        .zip(1..)
        .map(|(mut s, seqnum)| {
            s.index = seqnum;
            s
        })
        .collect()
}
