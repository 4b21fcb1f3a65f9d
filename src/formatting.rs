use std::io::{self, Write};
use std::path::Path;
use terminal_size::{Width, terminal_size};
use yansi::Paint;

/// Color palette for consistent theming
pub struct ColorPalette {
    pub primary: (u8, u8, u8),   // muted text
    pub path: (u8, u8, u8),      // file paths
    pub highlight: (u8, u8, u8), // newly created files
}

impl ColorPalette {
    pub const CATPPUCCIN: Self = Self {
        primary: (108, 112, 134),   // Gray
        path: (137, 180, 250),      // Blue
        highlight: (166, 227, 161), // Green
    };
}

/// Formatting context for user-facing messages
pub struct FormatContext {
    pub use_color: bool,
    pub palette: ColorPalette,
}

impl FormatContext {
    pub fn new(use_color: bool) -> Self {
        Self { use_color, palette: ColorPalette::CATPPUCCIN }
    }

    pub fn from_env() -> Self {
        let use_color = std::env::var("NO_COLOR").is_err();
        Self::new(use_color)
    }

    pub fn format_path(&self, path: &Path) -> String {
        let text = path.display().to_string();
        if self.use_color {
            let (r, g, b) = self.palette.path;
            Paint::rgb(&text, r, g, b).to_string()
        } else {
            text
        }
    }

    /// `label` followed by the path, e.g. `New note created: /zk/inbox/x.md`.
    /// Created files get the highlight color, existing ones the muted one.
    pub fn format_status(&self, label: &str, path: &Path, created: bool) -> String {
        let label = if self.use_color {
            let (r, g, b) = if created {
                self.palette.highlight
            } else {
                self.palette.primary
            };
            Paint::rgb(label, r, g, b).to_string()
        } else {
            label.to_string()
        };
        format!("{label}: {}", self.format_path(path))
    }
}

pub fn terminal_columns() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Write lines to stdout, tolerating a closed pipe (e.g. `zk help | head`).
pub fn print_lines(lines: &[String]) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for line in lines {
        if let Err(err) = writeln!(out, "{line}") {
            if err.kind() == io::ErrorKind::BrokenPipe {
                return Ok(());
            }
            return Err(err);
        }
    }
    out.flush()
}
