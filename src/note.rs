use crate::error::{Result, ZkError};
use crate::template::{self, Context};
use crate::vault::Vault;
use chrono::{DateTime, FixedOffset, Local};
use log::debug;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub fn now_fixed() -> DateTime<FixedOffset> {
    let now = Local::now();
    now.with_timezone(now.offset())
}

pub fn ensure_dir(path: &Path) -> io::Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}

/// Trim and check a note title. Returns the trimmed title.
pub fn validate_title(title: &str, max_len: usize) -> Result<&str> {
    let title = title.trim();
    if title.is_empty() {
        return Err(ZkError::EmptyTitle);
    }
    if title.chars().count() > max_len {
        return Err(ZkError::TitleTooLong { max: max_len });
    }
    if title.ends_with(".md") {
        return Err(ZkError::TitleHasExtension);
    }
    // The title becomes a file name directly inside the inbox.
    if title.starts_with('.') || title.contains(['/', '\\']) {
        return Err(ZkError::InvalidTitle(title.to_string()));
    }
    Ok(title)
}

pub fn load_template(path: &Path) -> Result<String> {
    match fs::read_to_string(path) {
        Ok(raw) => Ok(raw),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            Err(ZkError::TemplateNotFound(path.to_path_buf()))
        }
        Err(err) => Err(err.into()),
    }
}

/// Create `<inbox>/<title>.md` from a rendered template, titled after
/// `ctx.title()`.
///
/// The template is fully rendered before anything touches the inbox, so a
/// bad placeholder leaves no file behind.
pub fn create_note(
    vault: &Vault,
    ctx: &Context,
    template_name: Option<&str>,
) -> Result<PathBuf> {
    let title =
        validate_title(ctx.title(), vault.config().notes.max_title_length)?;
    let path = vault.note_path(title)?;
    if path.exists() {
        return Err(ZkError::NoteExists(path));
    }

    let template_path = vault.template_path(template_name)?;
    debug!("rendering {} for {title}", template_path.display());
    let raw = load_template(&template_path)?;
    let rendered = template::render(&raw, ctx)?;

    ensure_dir(&vault.inbox_dir()?)?;
    fs::write(&path, rendered)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::error::TemplateError;
    use chrono::TimeZone;
    use tempfile::tempdir;

    fn fixed_now() -> DateTime<FixedOffset> {
        FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(2025, 3, 7, 12, 0, 0)
            .unwrap()
    }

    fn ctx(title: &str) -> Context {
        Context::new(title, fixed_now())
    }

    fn vault_with_template(root: &Path, template: &str) -> Vault {
        let dir = root.join("meta").join("templates");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("note-template.md"), template).unwrap();
        Vault::new(root.to_path_buf(), Config::default())
    }

    #[test]
    fn test_validate_title() {
        assert_eq!(validate_title("  idea  ", 80).unwrap(), "idea");
        assert!(matches!(validate_title("   ", 80), Err(ZkError::EmptyTitle)));
        assert!(matches!(
            validate_title("abcdef", 5),
            Err(ZkError::TitleTooLong { max: 5 })
        ));
        assert!(matches!(
            validate_title("idea.md", 80),
            Err(ZkError::TitleHasExtension)
        ));
    }

    #[test]
    fn test_validate_title_rejects_paths() {
        for bad in ["../../escaped", "sub/idea", "win\\idea", ".hidden", "..", "/abs"] {
            assert!(
                matches!(validate_title(bad, 80), Err(ZkError::InvalidTitle(ref t)) if t == bad),
                "{bad} should be rejected"
            );
        }
        assert_eq!(validate_title("v1.2-notes", 80).unwrap(), "v1.2-notes");
    }

    #[test]
    fn test_create_note_stays_inside_inbox() {
        let tmp = tempdir().unwrap();
        let root = tmp.path().join("root");
        let vault = vault_with_template(&root, "body");
        let err = create_note(&vault, &ctx("../../escaped"), None).unwrap_err();
        assert!(matches!(err, ZkError::InvalidTitle(_)));
        assert!(!tmp.path().join("escaped.md").exists());
        assert!(!root.join("inbox").exists());
    }

    #[test]
    fn test_create_note_renders_template() {
        let tmp = tempdir().unwrap();
        let vault = vault_with_template(
            tmp.path(),
            "# <% tp.file.title %>\ncreated <% tp.file.creation_date() %>\n",
        );
        let path = create_note(&vault, &ctx("my-idea"), None).unwrap();
        assert_eq!(path, tmp.path().join("inbox").join("my-idea.md"));
        assert_eq!(
            fs::read_to_string(path).unwrap(),
            "# my-idea\ncreated 2025-03-07\n"
        );
    }

    #[test]
    fn test_create_note_refuses_existing() {
        let tmp = tempdir().unwrap();
        let vault = vault_with_template(tmp.path(), "body");
        create_note(&vault, &ctx("dup"), None).unwrap();
        let err = create_note(&vault, &ctx("dup"), None).unwrap_err();
        assert!(matches!(err, ZkError::NoteExists(_)));
    }

    #[test]
    fn test_create_note_bad_template_writes_nothing() {
        let tmp = tempdir().unwrap();
        let vault = vault_with_template(tmp.path(), "<% tp.unknown.thing() %>");
        let err = create_note(&vault, &ctx("broken"), None).unwrap_err();
        assert!(matches!(
            err,
            ZkError::Template(TemplateError::UnrecognizedCommand(ref c)) if c == "tp.unknown.thing()"
        ));
        assert!(!tmp.path().join("inbox").join("broken.md").exists());
    }

    #[test]
    fn test_create_note_missing_template() {
        let tmp = tempdir().unwrap();
        let vault = Vault::new(tmp.path().to_path_buf(), Config::default());
        let err = create_note(&vault, &ctx("idea"), Some("nope.md")).unwrap_err();
        assert!(matches!(err, ZkError::TemplateNotFound(_)));
    }
}
