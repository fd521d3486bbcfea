use std::fmt;
use std::time::Duration;

/// A point in time in `HH:MM:SS,mmm` form.
///
/// Values produced by the parser always have hours, minutes and seconds in
/// `0..=59` and milliseconds in `0..=999`. Values built with [`Timestamp::new`]
/// are not checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Timestamp {
    pub(crate) hours: u8,
    pub(crate) minutes: u8,
    pub(crate) seconds: u8,
    pub(crate) millis: u16,
}

impl Timestamp {
    pub const fn new(hours: u8, minutes: u8, seconds: u8, millis: u16) -> Self {
        Self {
            hours,
            minutes,
            seconds,
            millis,
        }
    }

    pub fn hours(&self) -> u8 {
        self.hours
    }

    pub fn minutes(&self) -> u8 {
        self.minutes
    }

    pub fn seconds(&self) -> u8 {
        self.seconds
    }

    pub fn millis(&self) -> u16 {
        self.millis
    }

    pub fn total_millis(&self) -> u64 {
        u64::from(self.millis)
            + u64::from(self.seconds) * 1000
            + u64::from(self.minutes) * 60 * 1000
            + u64::from(self.hours) * 60 * 60 * 1000
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02},{:03}",
            self.hours, self.minutes, self.seconds, self.millis
        )
    }
}

impl From<Timestamp> for Duration {
    fn from(ts: Timestamp) -> Self {
        Duration::from_millis(ts.total_millis())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subtitle {
    pub(crate) index: i64,
    pub(crate) start: Timestamp,
    pub(crate) end: Timestamp,
    pub(crate) caption: String,
}

impl Subtitle {
    pub fn new(index: i64, start: Timestamp, end: Timestamp, caption: impl Into<String>) -> Self {
        Self {
            index,
            start,
            end,
            caption: caption.into(),
        }
    }

    pub fn index(&self) -> i64 {
        self.index
    }

    pub fn start(&self) -> Timestamp {
        self.start
    }

    pub fn end(&self) -> Timestamp {
        self.end
    }

    /// The caption text, with one `\n` between caption lines.
    pub fn caption(&self) -> &str {
        &self.caption
    }

    pub fn caption_lines(&self) -> impl Iterator<Item = &str> {
        self.caption.split('\n')
    }

    pub fn set_caption(&mut self, caption: impl Into<String>) {
        self.caption = caption.into();
    }

    pub fn caption_mut(&mut self) -> &mut String {
        &mut self.caption
    }
}

/// Renders the block as `index`, `start --> end` and the caption, each
/// followed by a newline.
impl fmt::Display for Subtitle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", self.index)?;
        writeln!(f, "{} --> {}", self.start, self.end)?;
        writeln!(f, "{}", self.caption)
    }
}
