//! Normalizes grammar text into trimmed lines.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::error::Result;

/// Split a block of text into trimmed lines. Blank lines are kept.
pub fn normalize_text(text: &str) -> Vec<String> {
    normalize_lines(text.lines())
}

/// Trim each of an already split sequence of lines.
pub fn normalize_lines<I, S>(lines: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .map(|line| line.as_ref().trim().to_owned())
        .collect()
}

/// Drain a stream into trimmed lines.
pub fn read_grammar<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    let mut lines = Vec::new();
    for line in reader.lines() {
        lines.push(line?.trim().to_owned());
    }
    Ok(lines)
}

/// Read a grammar file into trimmed lines. The file is closed before
/// returning.
pub fn read_grammar_from_file(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let file = File::open(path)?;
    Ok(read_grammar(BufReader::new(file))?)
}

/// Grammar text in either of the forms a lexer accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Specification(Vec<String>);

impl Specification {
    pub fn into_lines(self) -> Vec<String> {
        self.0
    }
}

impl From<&str> for Specification {
    fn from(s: &str) -> Self {
        Self(normalize_text(s))
    }
}

impl From<String> for Specification {
    fn from(s: String) -> Self {
        Self(normalize_text(&s))
    }
}

impl From<Vec<String>> for Specification {
    fn from(lines: Vec<String>) -> Self {
        Self(normalize_lines(lines))
    }
}

impl From<&[&str]> for Specification {
    fn from(lines: &[&str]) -> Self {
        Self(normalize_lines(lines))
    }
}
