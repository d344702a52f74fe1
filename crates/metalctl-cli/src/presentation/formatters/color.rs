use metalctl_engine::status::Level;
use owo_colors::OwoColorize;

/// Colors table cells, or leaves them untouched when color is off.
///
/// Cells are plain `String`s with embedded ANSI codes, so the same rows work
/// for the terminal table and the markdown printer (which runs without color).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn plain() -> Self {
        Self { enabled: false }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn red(&self, s: &str) -> String {
        if self.enabled {
            s.red().to_string()
        } else {
            s.to_string()
        }
    }

    pub fn yellow(&self, s: &str) -> String {
        if self.enabled {
            s.yellow().to_string()
        } else {
            s.to_string()
        }
    }

    pub fn green(&self, s: &str) -> String {
        if self.enabled {
            s.green().to_string()
        } else {
            s.to_string()
        }
    }

    pub fn blue(&self, s: &str) -> String {
        if self.enabled {
            s.blue().to_string()
        } else {
            s.to_string()
        }
    }

    /// Green, yellow or red by severity.
    pub fn level(&self, s: &str, level: Level) -> String {
        match level {
            Level::Ok => self.green(s),
            Level::Warning => self.yellow(s),
            Level::Critical => self.red(s),
        }
    }
}
