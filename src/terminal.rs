//! Line-oriented terminal input shared by the results menu and the
//! interactive menu.

use std::io::{self, BufRead, Write};

use crate::clients::errors::Result;

/// Source of user input lines.
pub trait Input {
    /// Next line without its terminator, or `None` at end of input.
    fn next_line(&mut self) -> io::Result<Option<String>>;
}

fn strip_newline(mut line: String) -> String {
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    line
}

/// The process stdin, locked per line.
///
/// rspotify's authorization prompt reads stdin itself, so no lock may be held
/// while a playback call is awaited.
#[derive(Debug, Default)]
pub struct StdinInput;

impl Input for StdinInput {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = String::new();
        if io::stdin().read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(strip_newline(buf)))
    }
}

/// Input from any buffered reader, e.g. a byte slice in tests.
#[derive(Debug)]
pub struct ScriptedInput<R>(pub R);

impl<R: BufRead> Input for ScriptedInput<R> {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = String::new();
        if self.0.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(strip_newline(buf)))
    }
}

/// Print `message` without a newline and read the trimmed answer.
pub fn prompt<I, W>(input: &mut I, out: &mut W, message: &str) -> Result<Option<String>>
where
    I: Input + ?Sized,
    W: Write,
{
    write!(out, "{message}")?;
    out.flush()?;
    let line = input.next_line()?;
    Ok(line.map(|l| l.trim().to_string()))
}

/// Answer to a numbered list prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Zero-based index into the listed items.
    Item(usize),
    /// Leave the list.
    Back,
    /// Not a number in range.
    Invalid,
}

/// Interpret a numbered-list answer; `0`, `b` and `q` all mean back.
pub fn parse_selection(answer: &str, count: usize) -> Selection {
    match answer {
        "0" | "b" | "q" => Selection::Back,
        other => match other.parse::<usize>() {
            Ok(n) if (1..=count).contains(&n) => Selection::Item(n - 1),
            _ => Selection::Invalid,
        },
    }
}
