use crate::srt::Subtitle;

use std::io::{self, Write};

use log::debug;

/// Renders subtitles as SRT text, with one blank line between blocks and a
/// single trailing newline.
pub fn serialise(subs: &[Subtitle]) -> String {
    debug!("Serialising {} subtitles", subs.len());
    subs.iter()
        .map(Subtitle::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Streams the same text [`serialise`] produces into `buf`.
pub fn write_subs<W: Write>(buf: &mut W, subs: &[Subtitle]) -> io::Result<()> {
    for (i, sub) in subs.iter().enumerate() {
        if i > 0 {
            writeln!(buf)?;
        }
        write!(buf, "{}", sub)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::srt::Timestamp;
    use std::io::Cursor;

    fn sub(index: i64, caption: &str) -> Subtitle {
        Subtitle::new(
            index,
            Timestamp::new(0, 0, index as u8, 0),
            Timestamp::new(0, 0, index as u8, 500),
            caption,
        )
    }

    macro_rules! test_serialise {
        ($($name:ident: $value:expr,)*) => {
        $(
            #[test]
            fn $name() {
                let (input, expected): (Vec<Subtitle>, &str) = $value;

                assert_eq!(serialise(&input), expected);

                let mut buf = Cursor::new(vec![]);
                write_subs(&mut buf, &input).expect("Failed to write to buffer");
                assert_eq!(String::from_utf8(buf.into_inner()).unwrap(), expected);
            }
        )*
        }
    }

    test_serialise! {
        test_serialise_0: (vec![], ""),
        test_serialise_1: (vec![sub(1, "a")], "1\n00:00:01,000 --> 00:00:01,500\na\n"),
        test_serialise_2: (
            vec![sub(1, "a"), sub(2, "b\nc")],
            "1\n00:00:01,000 --> 00:00:01,500\na\n\n2\n00:00:02,000 --> 00:00:02,500\nb\nc\n"
        ),
        test_serialise_3: (vec![sub(7, "")], "7\n00:00:07,000 --> 00:00:07,500\n\n"),
    }

    #[test]
    fn out_of_range_values_are_written_as_is() {
        let sub = Subtitle::new(
            1,
            Timestamp::new(75, 60, 60, 1000),
            Timestamp::new(0, 0, 0, 0),
            "x",
        );
        assert_eq!(serialise(&[sub]), "1\n75:60:60,1000 --> 00:00:00,000\nx\n");
    }
}
