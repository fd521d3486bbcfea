//! Parsing and serialising of SubRip (`.srt`) subtitles.
//!
//! ```
//! let subs = subrip::parse_text("1\n00:00:01,000 --> 00:00:02,500\nHello\n").unwrap();
//! assert_eq!(subs[0].caption(), "Hello");
//! assert_eq!(subrip::serialise(&subs), "1\n00:00:01,000 --> 00:00:02,500\nHello\n");
//! ```

pub mod error;
mod parser;
pub mod processor;
mod serialiser;
mod srt;

pub use crate::error::ParseError;
pub use crate::parser::parse_text;
pub use crate::serialiser::{serialise, write_subs};
pub use crate::srt::{Subtitle, Timestamp};
