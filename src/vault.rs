//! Resolved on-disk layout of a Zettelkasten.

use crate::config::{Config, expand_tilde};
use crate::error::Result;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct Vault {
    root: PathBuf,
    config: Config,
}

impl Vault {
    pub fn new(root: PathBuf, config: Config) -> Self {
        Self { root, config }
    }

    /// Build from a loaded config, honouring `$ZETTELKASTEN`.
    pub fn from_config(config: Config) -> Result<Self> {
        let root = config.root()?;
        Ok(Self::new(root, config))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn inbox_dir(&self) -> Result<PathBuf> {
        self.resolve(&self.config.notes.inbox)
    }

    pub fn note_path(&self, title: &str) -> Result<PathBuf> {
        Ok(self.inbox_dir()?.join(format!("{title}.md")))
    }

    /// `name` inside the template dir, or the configured default template.
    pub fn template_path(&self, name: Option<&str>) -> Result<PathBuf> {
        let dir = self.resolve(&self.config.notes.template_dir)?;
        Ok(dir.join(name.unwrap_or(&self.config.notes.default_template)))
    }

    pub fn daily_dir(&self) -> Result<PathBuf> {
        self.resolve(&self.config.periodic.daily_dir)
    }

    pub fn weekly_dir(&self) -> Result<PathBuf> {
        self.resolve(&self.config.periodic.weekly_dir)
    }

    pub fn daily_template(&self) -> Result<PathBuf> {
        self.resolve(&self.config.periodic.daily_template)
    }

    pub fn weekly_template(&self) -> Result<PathBuf> {
        self.resolve(&self.config.periodic.weekly_template)
    }

    fn resolve(&self, value: &str) -> Result<PathBuf> {
        let path = expand_tilde(value)?;
        if path.is_absolute() {
            Ok(path)
        } else {
            Ok(self.root.join(path))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vault() -> Vault {
        Vault::new(PathBuf::from("/zk"), Config::default())
    }

    #[test]
    fn test_default_layout() {
        let v = vault();
        assert_eq!(v.inbox_dir().unwrap(), PathBuf::from("/zk/inbox"));
        assert_eq!(
            v.note_path("my-idea").unwrap(),
            PathBuf::from("/zk/inbox/my-idea.md")
        );
        assert_eq!(
            v.template_path(None).unwrap(),
            PathBuf::from("/zk/meta/templates/note-template.md")
        );
        assert_eq!(
            v.template_path(Some("book.md")).unwrap(),
            PathBuf::from("/zk/meta/templates/book.md")
        );
        assert_eq!(
            v.daily_dir().unwrap(),
            PathBuf::from("/zk/periodic-notes/daily")
        );
        assert_eq!(
            v.weekly_template().unwrap(),
            PathBuf::from("/zk/meta/templates/weekly.md")
        );
    }

    #[test]
    fn test_absolute_paths_bypass_root() {
        let mut config = Config::default();
        config.notes.inbox = "/elsewhere/inbox".to_string();
        let v = Vault::new(PathBuf::from("/zk"), config);
        assert_eq!(v.inbox_dir().unwrap(), PathBuf::from("/elsewhere/inbox"));
    }
}
