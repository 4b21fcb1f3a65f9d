use std::path::PathBuf;
use thiserror::Error;

/// Failures of the placeholder expansion pipeline. Every variant aborts the
/// render; no partial output is produced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    #[error(
        "Malformed template: `<%` at byte {offset} has no closing `%>`"
    )]
    Malformed { offset: usize },

    #[error(
        "Command not found in the templater map: `{0}`. Add it to the command catalog manually."
    )]
    UnrecognizedCommand(String),

    #[error(
        "Template changed during substitution: found {spans} placeholder(s) but {results} result(s)"
    )]
    SubstitutionMismatch { spans: usize, results: usize },
}

#[derive(Error, Debug)]
pub enum ZkError {
    #[error("Note title cannot be empty.")]
    EmptyTitle,

    #[error("Title cannot be more than {max} characters.")]
    TitleTooLong { max: usize },

    #[error("Leave out the .md extension.")]
    TitleHasExtension,

    #[error(
        "Invalid title `{0}`: titles cannot contain `/` or `\\` or start with `.`"
    )]
    InvalidTitle(String),

    #[error("The file already exists: {}", .0.display())]
    NoteExists(PathBuf),

    #[error("Template not found: {}", .0.display())]
    TemplateNotFound(PathBuf),

    #[error("Failed to parse config {}: {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error(
        "Config file is already present: {}. Use --force to override the configuration file.",
        .0.display()
    )]
    ConfigExists(PathBuf),

    #[error("HOME not set; set ZETTELKASTEN and ZETTELKASTEN_CONFIG explicitly")]
    NoHome,

    #[error(transparent)]
    Template(#[from] TemplateError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ZkError>;
