//! `zk help [topic]`: an overview page or a single topic, wrapped to the
//! terminal width.

use crate::formatting::{print_lines, terminal_columns};
use std::error::Error;

mod content;

#[derive(Clone, Copy, PartialEq, Eq)]
pub(crate) enum Section {
    Command,
    Environment,
    Guide,
}

impl Section {
    const ORDER: [Section; 3] =
        [Section::Command, Section::Environment, Section::Guide];

    fn heading(self) -> &'static str {
        match self {
            Section::Command => "Commands",
            Section::Environment => "Environment",
            Section::Guide => "Guides",
        }
    }
}

pub(crate) struct Topic {
    pub name: &'static str,
    pub summary: &'static str,
    pub usage: &'static str,
    pub details: &'static [&'static str],
    /// (flag, description)
    pub options: &'static [(&'static str, &'static str)],
    pub aliases: &'static [&'static str],
    pub section: Section,
    pub examples: &'static [&'static str],
}

impl Topic {
    /// Left column of the overview: commands show their usage line.
    fn overview_label(&self) -> &'static str {
        match self.section {
            Section::Command => self.usage,
            Section::Environment | Section::Guide => self.name,
        }
    }
}

pub(crate) struct HelpBook {
    pub title: &'static str,
    pub usage: &'static str,
    pub topics: &'static [Topic],
    pub footer: &'static str,
}

impl HelpBook {
    fn find(&self, name: &str) -> Option<&Topic> {
        self.topics.iter().find(|t| {
            t.name.eq_ignore_ascii_case(name)
                || t.aliases.iter().any(|a| a.eq_ignore_ascii_case(name))
        })
    }
}

pub(crate) fn run(args: Vec<String>) -> Result<(), Box<dyn Error>> {
    let book = content::book();
    let width = terminal_columns().unwrap_or(96).clamp(64, 120);
    let topic = match args.first() {
        Some(name) => {
            let found = book.find(name);
            if found.is_none() {
                eprintln!("Unknown help topic: {name}");
            }
            found
        }
        None => None,
    };
    print_lines(&render(&book, topic, width))?;
    Ok(())
}

fn render(book: &HelpBook, topic: Option<&Topic>, width: usize) -> Vec<String> {
    let mut out = match topic {
        Some(topic) => topic_page(topic, width),
        None => overview(book, width),
    };
    out.extend(wrap(book.footer, width));
    out
}

fn overview(book: &HelpBook, width: usize) -> Vec<String> {
    let mut out = vec![
        book.title.to_string(),
        format!("usage: {}", book.usage),
        String::new(),
    ];
    for section in Section::ORDER {
        let rows: Vec<(&str, &str)> = book
            .topics
            .iter()
            .filter(|t| t.section == section)
            .map(|t| (t.overview_label(), t.summary))
            .collect();
        out.extend(columns(section.heading(), &rows, width));
    }
    out
}

fn topic_page(topic: &Topic, width: usize) -> Vec<String> {
    let mut out = vec![
        format!("{} - {}", topic.name, topic.summary),
        format!("usage: {}", topic.usage),
    ];
    if !topic.aliases.is_empty() {
        out.push(format!("aliases: {}", topic.aliases.join(", ")));
    }
    out.push(String::new());

    for detail in topic.details {
        out.extend(wrap(detail, width));
    }
    if !topic.details.is_empty() {
        out.push(String::new());
    }

    out.extend(columns("Options", topic.options, width));

    if !topic.examples.is_empty() {
        out.push("Examples:".to_string());
        out.extend(topic.examples.iter().map(|ex| format!("  {ex}")));
        out.push(String::new());
    }
    out
}

/// Label/description rows under a heading. Labels wider than a third of the
/// screen get a line of their own.
fn columns(heading: &str, rows: &[(&str, &str)], width: usize) -> Vec<String> {
    if rows.is_empty() {
        return Vec::new();
    }
    let label_width =
        rows.iter().map(|(l, _)| l.len()).max().unwrap_or(0).min(width / 3);
    let desc_width = width.saturating_sub(label_width + 4).max(20);

    let mut out = vec![format!("{heading}:")];
    for (label, desc) in rows {
        let mut desc_lines = wrap(desc, desc_width).into_iter();
        let first = desc_lines.next().unwrap_or_default();
        if label.len() > label_width {
            out.push(format!("  {label}"));
            out.push(format!("  {:label_width$}  {first}", ""));
        } else {
            out.push(format!("  {label:label_width$}  {first}"));
        }
        out.extend(desc_lines.map(|l| format!("  {:label_width$}  {l}", "")));
    }
    out.push(String::new());
    out
}

/// Greedy word wrap. Always yields at least one (possibly empty) line.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if !current.is_empty() && current.len() + 1 + word.len() > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    lines.push(current);
    lines
}
