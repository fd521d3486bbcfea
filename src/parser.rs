use crate::error::{
    ParseError, INVALID_HOURS, INVALID_INDEX, INVALID_MILLIS, INVALID_MINUTES, INVALID_SECONDS,
    INVALID_TIMESTAMP, INVALID_TIMESTAMP_PAIR,
};
use crate::srt::{Subtitle, Timestamp};

use std::str::FromStr;

use log::{debug, trace};
use nom::character::complete::{digit1, one_of};
use nom::combinator::{all_consuming, map_res, opt, recognize};
use nom::sequence::pair;
use nom::IResult;
use once_cell::sync::Lazy;
use regex::Regex;

const BOM: char = '\u{FEFF}';
const BLOCK_SEPARATOR: &str = "\n\n";
const TIMESTAMP_SEPARATOR: &str = " --> ";

static NEWLINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\r\n|\r|\n").expect("valid regex"));

/// Parses SRT text into subtitles, in the order they appear.
///
/// Parsing stops at the first fault. Empty input gives an empty list.
pub fn parse_text(input: &str) -> Result<Vec<Subtitle>, ParseError> {
    let normalized = normalize(input);
    let mut blocks = Blocks::new(&normalized);
    let mut subs = Vec::new();
    while let Some(block) = blocks.next_block() {
        let (sub, consumed) = parse_block(block.text, block.line)?;
        trace!(
            "Parsed subtitle {} from lines {}..{}",
            sub.index,
            block.line,
            block.line + consumed
        );
        blocks.advance(consumed);
        subs.push(sub);
    }
    debug!("Parsed {} subtitles", subs.len());
    Ok(subs)
}

/// Trims every physical line and rejoins them with `\n`.
pub(crate) fn normalize(input: &str) -> String {
    let input = input.strip_prefix(BOM).unwrap_or(input);
    NEWLINE
        .split(input)
        .map(str::trim)
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Debug, PartialEq)]
pub(crate) struct Block<'a> {
    pub(crate) line: usize,
    pub(crate) text: &'a str,
}

/// Splits normalized text into blocks and keeps track of the line each one starts on.
///
/// After each block, the caller reports how many lines it consumed through [`Blocks::advance`].
pub(crate) struct Blocks<'a> {
    chunks: std::str::Split<'a, &'static str>,
    line: usize,
    trailing: usize,
}

impl<'a> Blocks<'a> {
    pub(crate) fn new(text: &'a str) -> Self {
        Self {
            chunks: text.split(BLOCK_SEPARATOR),
            line: 1,
            trailing: 0,
        }
    }

    pub(crate) fn next_block(&mut self) -> Option<Block<'a>> {
        for chunk in self.chunks.by_ref() {
            let text = chunk.trim_matches('\n');
            if text.is_empty() {
                // Nothing but blank lines, plus the separator after them.
                self.line += chunk.len() + 2;
                continue;
            }
            let leading = chunk.len() - chunk.trim_start_matches('\n').len();
            self.line += leading;
            self.trailing = chunk.len() - leading - text.len();
            return Some(Block {
                line: self.line,
                text,
            });
        }
        None
    }

    pub(crate) fn advance(&mut self, consumed: usize) {
        self.line += consumed + self.trailing + 1;
        self.trailing = 0;
    }
}

/// Parses a single block starting on `line`.
///
/// Returns the subtitle and the number of lines the block spans.
pub(crate) fn parse_block(block: &str, line: usize) -> Result<(Subtitle, usize), ParseError> {
    let mut lines = block.split('\n');
    let index = lines
        .next()
        .and_then(signed_integer)
        .ok_or_else(|| ParseError::new(line, INVALID_INDEX))?;
    let (start, end) = parse_timestamp_pair(lines.next().unwrap_or_default(), line + 1)?;
    let caption: Vec<&str> = lines.collect();
    let consumed = 2 + caption.len();

    Ok((
        Subtitle {
            index,
            start,
            end,
            caption: caption.join("\n"),
        },
        consumed,
    ))
}

pub(crate) fn parse_timestamp_pair(
    input: &str,
    line: usize,
) -> Result<(Timestamp, Timestamp), ParseError> {
    match input.split(TIMESTAMP_SEPARATOR).collect::<Vec<_>>()[..] {
        [start, end] => Ok((parse_timestamp(start, line)?, parse_timestamp(end, line)?)),
        _ => Err(ParseError::new(line, INVALID_TIMESTAMP_PAIR)),
    }
}

pub(crate) fn parse_timestamp(input: &str, line: usize) -> Result<Timestamp, ParseError> {
    let fail = |reason| ParseError::new(line, reason);

    let (time, millis) = match input.split(',').collect::<Vec<_>>()[..] {
        [time, millis] => (time, millis),
        _ => return Err(fail(INVALID_TIMESTAMP)),
    };
    let (hours, minutes, seconds) = match time.split(':').collect::<Vec<_>>()[..] {
        [h, m, s] => (h, m, s),
        _ => return Err(fail(INVALID_TIMESTAMP)),
    };

    Ok(Timestamp {
        hours: bounded(hours, 59).ok_or_else(|| fail(INVALID_HOURS))?,
        minutes: bounded(minutes, 59).ok_or_else(|| fail(INVALID_MINUTES))?,
        seconds: bounded(seconds, 59).ok_or_else(|| fail(INVALID_SECONDS))?,
        millis: bounded(millis, 999).ok_or_else(|| fail(INVALID_MILLIS))?,
    })
}

fn bounded<T: FromStr + PartialOrd>(input: &str, max: T) -> Option<T> {
    integer(input).filter(|value| *value <= max)
}

/// Accepts a plain string of ASCII digits that fits in `T`.
fn integer<T: FromStr>(input: &str) -> Option<T> {
    let res: IResult<&str, T> = all_consuming(map_res(digit1, |s: &str| s.parse::<T>()))(input);
    res.ok().map(|(_, value)| value)
}

/// Like [`integer`], with an optional leading `+` or `-`.
fn signed_integer(input: &str) -> Option<i64> {
    let res: IResult<&str, i64> = all_consuming(map_res(
        recognize(pair(opt(one_of("+-")), digit1)),
        |s: &str| s.parse::<i64>(),
    ))(input);
    res.ok().map(|(_, value)| value)
}
