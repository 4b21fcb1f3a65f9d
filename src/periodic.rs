//! Daily and weekly notes, named after their date.

use crate::error::{Result, ZkError};
use crate::note::{ensure_dir, load_template};
use crate::template::{self, Context};
use crate::vault::Vault;
use chrono::{DateTime, Datelike, Duration, FixedOffset, NaiveDate};
use log::{debug, warn};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    Daily,
    Weekly,
}

impl Period {
    pub fn label(self) -> &'static str {
        match self {
            Period::Daily => "daily",
            Period::Weekly => "weekly",
        }
    }

    /// File stem for the period containing `date`.
    pub fn stem(self, date: NaiveDate) -> String {
        match self {
            Period::Daily => date.format("%Y-%m-%d").to_string(),
            Period::Weekly => week_start(date).format("%G-W%V").to_string(),
        }
    }

    /// Stems of the previous and next periods.
    pub fn neighbours(self, date: NaiveDate) -> (String, String) {
        let step = match self {
            Period::Daily => Duration::days(1),
            Period::Weekly => Duration::days(7),
        };
        (self.stem(date - step), self.stem(date + step))
    }

    fn fallback(self) -> &'static str {
        match self {
            Period::Daily => "\n## Journal\n\n",
            Period::Weekly => "\n## Weekly Journal\n\n",
        }
    }

    fn dir(self, vault: &Vault) -> Result<PathBuf> {
        match self {
            Period::Daily => vault.daily_dir(),
            Period::Weekly => vault.weekly_dir(),
        }
    }

    fn template(self, vault: &Vault) -> Result<PathBuf> {
        match self {
            Period::Daily => vault.daily_template(),
            Period::Weekly => vault.weekly_template(),
        }
    }
}

/// Monday of the ISO week containing `date`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodicNote {
    pub path: PathBuf,
    pub created: bool,
}

/// Body of a new periodic note: navigation links to the neighbouring
/// periods, then the rendered template (or a plain journal heading).
pub fn periodic_content(
    vault: &Vault,
    period: Period,
    now: DateTime<FixedOffset>,
) -> Result<String> {
    let today = now.date_naive();
    let (prev, next) = period.neighbours(today);
    let mut content = format!("[[{prev}]] - [[{next}]]\n\n");

    let template_path = period.template(vault)?;
    match load_template(&template_path) {
        Ok(raw) => {
            let ctx = Context::new(period.stem(today), now);
            content.push_str(&template::render(&raw, &ctx)?);
        }
        Err(ZkError::TemplateNotFound(path)) => {
            warn!(
                "{} template not found at {}, using default",
                period.label(),
                path.display()
            );
            content.push_str(period.fallback());
        }
        Err(err) => return Err(err),
    }
    Ok(content)
}

/// Make sure the note for the current period exists.
pub fn ensure_periodic_note(
    vault: &Vault,
    period: Period,
    now: DateTime<FixedOffset>,
) -> Result<PeriodicNote> {
    let dir = period.dir(vault)?;
    let path = dir.join(format!("{}.md", period.stem(now.date_naive())));
    if path.exists() {
        debug!("{} note already present at {}", period.label(), path.display());
        return Ok(PeriodicNote { path, created: false });
    }
    let content = periodic_content(vault, period, now)?;
    ensure_dir(&dir)?;
    fs::write(&path, content)?;
    Ok(PeriodicNote { path, created: true })
}

/// Append an Obsidian link to `title` at the end of today's daily note.
pub fn append_daily_link(
    vault: &Vault,
    title: &str,
    now: DateTime<FixedOffset>,
) -> Result<PeriodicNote> {
    let daily = ensure_periodic_note(vault, Period::Daily, now)?;
    let mut file = OpenOptions::new().append(true).open(&daily.path)?;
    write!(file, "\n[[{title}]]")?;
    Ok(daily)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use chrono::TimeZone;
    use tempfile::tempdir;

    fn at(y: i32, m: u32, d: u32) -> DateTime<FixedOffset> {
        FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(y, m, d, 8, 0, 0)
            .unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_daily_stem_and_neighbours() {
        let d = date(2025, 3, 1);
        assert_eq!(Period::Daily.stem(d), "2025-03-01");
        assert_eq!(
            Period::Daily.neighbours(d),
            ("2025-02-28".to_string(), "2025-03-02".to_string())
        );
    }

    #[test]
    fn test_weekly_stem_uses_iso_week() {
        assert_eq!(Period::Weekly.stem(date(2025, 3, 7)), "2025-W10");
        assert_eq!(Period::Weekly.stem(date(2025, 3, 3)), "2025-W10");
        assert_eq!(Period::Weekly.stem(date(2025, 3, 9)), "2025-W10");
        // Belongs to the first ISO week of 2025.
        assert_eq!(Period::Weekly.stem(date(2024, 12, 31)), "2025-W01");
        assert_eq!(
            Period::Weekly.neighbours(date(2025, 3, 7)),
            ("2025-W09".to_string(), "2025-W11".to_string())
        );
    }

    #[test]
    fn test_week_start_is_monday() {
        assert_eq!(week_start(date(2025, 3, 7)), date(2025, 3, 3));
        assert_eq!(week_start(date(2025, 3, 3)), date(2025, 3, 3));
    }

    #[test]
    fn test_daily_note_fallback_content() {
        let tmp = tempdir().unwrap();
        let vault = Vault::new(tmp.path().to_path_buf(), Config::default());
        let note =
            ensure_periodic_note(&vault, Period::Daily, at(2025, 3, 7)).unwrap();
        assert!(note.created);
        assert_eq!(
            note.path,
            tmp.path().join("periodic-notes/daily/2025-03-07.md")
        );
        assert_eq!(
            fs::read_to_string(&note.path).unwrap(),
            "[[2025-03-06]] - [[2025-03-08]]\n\n\n## Journal\n\n"
        );

        let again =
            ensure_periodic_note(&vault, Period::Daily, at(2025, 3, 7)).unwrap();
        assert!(!again.created);
    }

    #[test]
    fn test_weekly_note_renders_template() {
        let tmp = tempdir().unwrap();
        let templates = tmp.path().join("meta/templates");
        fs::create_dir_all(&templates).unwrap();
        fs::write(templates.join("weekly.md"), "# Week <% tp.file.title %>\n")
            .unwrap();
        let vault = Vault::new(tmp.path().to_path_buf(), Config::default());
        let note =
            ensure_periodic_note(&vault, Period::Weekly, at(2025, 3, 7)).unwrap();
        assert_eq!(
            fs::read_to_string(note.path).unwrap(),
            "[[2025-W09]] - [[2025-W11]]\n\n# Week 2025-W10\n"
        );
    }

    #[test]
    fn test_append_daily_link() {
        let tmp = tempdir().unwrap();
        let vault = Vault::new(tmp.path().to_path_buf(), Config::default());
        append_daily_link(&vault, "first", at(2025, 3, 7)).unwrap();
        let daily = append_daily_link(&vault, "second", at(2025, 3, 7)).unwrap();
        let body = fs::read_to_string(daily.path).unwrap();
        assert!(body.ends_with("\n[[first]]\n[[second]]"));
    }
}
