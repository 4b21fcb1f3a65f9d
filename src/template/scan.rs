//! Placeholder scanning shared by extraction and substitution.
//!
//! A placeholder starts at `<%` and ends at the nearest following `%>`.
//! Spans never nest; a stray `%>` outside a span is plain text.

use crate::error::TemplateError;

pub const OPEN: &str = "<%";
pub const CLOSE: &str = "%>";

/// One placeholder occurrence inside a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span<'a> {
    /// Byte offset of the opening `<%`.
    pub start: usize,
    /// Byte offset just past the closing `%>`.
    pub end: usize,
    /// Trimmed text between the delimiters.
    pub command: &'a str,
}

/// Forward-only iterator over the placeholders of a template, in document
/// order. Yields a single `Malformed` error and stops when an open marker is
/// never closed.
pub struct Placeholders<'a> {
    text: &'a str,
    pos: usize,
    done: bool,
}

impl<'a> Placeholders<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text, pos: 0, done: false }
    }
}

impl<'a> Iterator for Placeholders<'a> {
    type Item = Result<Span<'a>, TemplateError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let Some(rel_open) = self.text[self.pos..].find(OPEN) else {
            self.done = true;
            return None;
        };
        let start = self.pos + rel_open;
        let inner_start = start + OPEN.len();
        match self.text[inner_start..].find(CLOSE) {
            Some(rel_close) => {
                let inner_end = inner_start + rel_close;
                let end = inner_end + CLOSE.len();
                self.pos = end;
                Some(Ok(Span {
                    start,
                    end,
                    command: self.text[inner_start..inner_end].trim(),
                }))
            }
            None => {
                self.done = true;
                Some(Err(TemplateError::Malformed { offset: start }))
            }
        }
    }
}

/// Collect the command text of every placeholder, left to right.
pub fn extract_commands(text: &str) -> Result<Vec<&str>, TemplateError> {
    Placeholders::new(text).map(|span| span.map(|s| s.command)).collect()
}
