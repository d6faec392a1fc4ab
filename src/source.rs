use std::io::BufRead;

use tracing::debug;

use crate::error::{Error, Result};

pub const HEADER: &str = ".IPPcode24";
pub const COMMENT: char = '#';

/// A non-empty source line with comments stripped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// 1-based line number in the original input.
    pub number: usize,
    pub text: String,
}

/// Truncates at the first comment marker and trims what is left.
///
/// There is no escaping: a `#` inside a `string@` constant ends the line
/// just like a real comment does.
pub fn clean(line: &str) -> &str {
    let code = match line.split_once(COMMENT) {
        Some((code, _)) => code,
        None => line,
    };
    code.trim()
}

/// Reads the whole input, drops blank and comment-only lines and checks the
/// header. The header line is not part of the result.
pub fn read_source<R: BufRead>(reader: R) -> Result<Vec<Line>> {
    let mut lines = vec![];

    for (i, line) in reader.lines().enumerate() {
        let line = line.map_err(Error::Input)?;
        let text = clean(&line);

        if !text.is_empty() {
            lines.push(Line {
                number: i + 1,
                text: text.to_owned(),
            });
        }
    }

    check_header(&lines)?;
    debug!(lines = lines.len() - 1, "header accepted");

    lines.remove(0);
    Ok(lines)
}

fn check_header(lines: &[Line]) -> Result<()> {
    match lines.first() {
        Some(first) if first.text.eq_ignore_ascii_case(HEADER) => Ok(()),
        _ => Err(Error::Header),
    }
}
