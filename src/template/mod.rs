//! Templater placeholder expansion.
//!
//! Rendering runs extract -> evaluate -> substitute over a template once.
//! Results are queued in extraction order and substituted positionally.

pub mod command;
pub mod scan;
pub mod substitute;

pub use command::{TemplaterCommand, ordinal};
pub use scan::{Placeholders, Span, extract_commands};
pub use substitute::substitute;

use crate::error::TemplateError;
use chrono::{DateTime, FixedOffset, NaiveDate};
use log::debug;
use std::collections::VecDeque;

/// Inputs shared by every command of one render: the note title and the
/// instant captured when the render started.
#[derive(Debug, Clone)]
pub struct Context {
    title: String,
    now: DateTime<FixedOffset>,
}

impl Context {
    pub fn new(title: impl Into<String>, now: DateTime<FixedOffset>) -> Self {
        Self { title: title.into(), now }
    }

    /// Capture the local wall-clock time once for this invocation.
    pub fn capture(title: impl Into<String>) -> Self {
        Self::new(title, crate::note::now_fixed())
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn now(&self) -> DateTime<FixedOffset> {
        self.now
    }

    pub fn today(&self) -> NaiveDate {
        self.now.date_naive()
    }
}

/// Expand every placeholder in `template`. Fails without partial output on
/// the first malformed span or unrecognized command.
pub fn render(template: &str, ctx: &Context) -> Result<String, TemplateError> {
    let commands = extract_commands(template)?;
    debug!("extracted {} templater command(s)", commands.len());

    let results = commands
        .iter()
        .map(|cmd| cmd.parse::<TemplaterCommand>().map(|c| c.evaluate(ctx)))
        .collect::<Result<VecDeque<_>, _>>()?;

    substitute(template, results)
}
