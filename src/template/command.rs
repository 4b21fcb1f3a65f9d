use super::Context;
use crate::error::TemplateError;
use chrono::{Datelike, Duration};
use std::str::FromStr;

pub const DATE_FMT: &str = "%Y-%m-%d";

/// The closed catalog of Templater snippets this tool knows how to expand.
///
/// Matching is exact on the trimmed placeholder text. Supporting a new
/// snippet means adding a variant here, never interpreting the snippet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplaterCommand {
    /// `my-new-idea` -> `My New Idea`
    TitleCase,
    /// `my-new-idea` -> `MY NEW IDEA`
    UpperCase,
    CreationDate,
    Title,
    PreviousDay,
    NextDay,
    /// `Friday, the 7th March 2025`
    LongDate,
}

impl TemplaterCommand {
    pub const ALL: [Self; 7] = [
        Self::TitleCase,
        Self::UpperCase,
        Self::CreationDate,
        Self::Title,
        Self::PreviousDay,
        Self::NextDay,
        Self::LongDate,
    ];

    /// Placeholder text (without `<%`/`%>`) recognized for this command.
    pub fn syntax(self) -> &'static str {
        match self {
            Self::TitleCase => {
                r#"(tp.file.title.charAt(0).toUpperCase()+tp.file.title.slice(1)).split("-").join(" ")"#
            }
            Self::UpperCase => r#"tp.file.title.split("-").join(" ").toUpperCase()"#,
            Self::CreationDate => "tp.file.creation_date()",
            Self::Title => "tp.file.title",
            Self::PreviousDay => {
                "fileDate = moment(tp.file.title, 'YYYY-MM-DD').subtract(1, 'd').format('YYYY-MM-DD')"
            }
            Self::NextDay => {
                "fileDate = moment(tp.file.title, 'YYYY-MM-DD').add(1, 'd').format('YYYY-MM-DD')"
            }
            Self::LongDate => {
                r#"tp.date.now("dddd, Do MMMM YYYY", 0, tp.file.title, "YYYYMMDD")"#
            }
        }
    }

    pub fn evaluate(self, ctx: &Context) -> String {
        match self {
            Self::TitleCase => {
                ctx.title().split('-').map(capitalize).collect::<Vec<_>>().join(" ")
            }
            Self::UpperCase => ctx
                .title()
                .split('-')
                .map(str::to_uppercase)
                .collect::<Vec<_>>()
                .join(" "),
            Self::CreationDate => ctx.now().format(DATE_FMT).to_string(),
            Self::Title => ctx.title().to_string(),
            Self::PreviousDay => {
                (ctx.now() - Duration::days(1)).format(DATE_FMT).to_string()
            }
            Self::NextDay => {
                (ctx.now() + Duration::days(1)).format(DATE_FMT).to_string()
            }
            Self::LongDate => {
                let now = ctx.now();
                format!(
                    "{}, the {} {}",
                    now.format("%A"),
                    ordinal(now.day()),
                    now.format("%B %Y")
                )
            }
        }
    }
}

impl FromStr for TemplaterCommand {
    type Err = TemplateError;

    fn from_str(command: &str) -> Result<Self, Self::Err> {
        let cmd = command.trim();
        Self::ALL
            .into_iter()
            .find(|known| known.syntax() == cmd)
            .ok_or_else(|| TemplateError::UnrecognizedCommand(cmd.to_string()))
    }
}

/// Day of month with its English ordinal suffix.
pub fn ordinal(day: u32) -> String {
    let suffix = match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{day}{suffix}")
}

fn capitalize(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
