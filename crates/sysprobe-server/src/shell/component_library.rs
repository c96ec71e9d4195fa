//! Text component library
//!
//! Renders headings, labelled fields and paragraphs in the installed theme.
//! ANSI styling is optional so output stays clean when piped.

use sysprobe_domain::error::Result;
use sysprobe_infrastructure::config::Theme;

use super::plugin::{AppContext, Plugin};
use crate::constants::{COMPONENT_LIBRARY_PLUGIN, FIELD_LABEL_WIDTH};

const ANSI_RESET: &str = "\x1b[0m";

/// Themed text components
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComponentLibrary {
    theme: Theme,
    ansi: bool,
}

impl ComponentLibrary {
    /// Plain-text components in the given theme
    pub fn new(theme: Theme) -> Self {
        Self { theme, ansi: false }
    }

    /// Enable or disable ANSI styling
    #[must_use]
    pub fn with_ansi(mut self, ansi: bool) -> Self {
        self.ansi = ansi;
        self
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Title followed by an underline
    pub fn heading(&self, text: &str) -> String {
        let rule = "=".repeat(text.chars().count());
        format!("{}\n{rule}\n", self.emphasize(text))
    }

    /// Section title followed by a lighter underline
    pub fn subheading(&self, text: &str) -> String {
        let rule = "-".repeat(text.chars().count());
        format!("{}\n{rule}\n", self.emphasize(text))
    }

    /// `label : value` line with aligned labels
    pub fn field(&self, label: &str, value: &str) -> String {
        format!("{label:<FIELD_LABEL_WIDTH$}: {value}\n")
    }

    /// Text block
    pub fn paragraph(&self, text: &str) -> String {
        format!("{text}\n")
    }

    fn emphasize(&self, text: &str) -> String {
        if !self.ansi {
            return text.to_string();
        }
        let style = match self.theme {
            Theme::Dark => "\x1b[1;97m",
            Theme::Light => "\x1b[1;30m",
        };
        format!("{style}{text}{ANSI_RESET}")
    }
}

impl Default for ComponentLibrary {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}

impl Plugin for ComponentLibrary {
    fn name(&self) -> &'static str {
        COMPONENT_LIBRARY_PLUGIN
    }

    fn install(&self, app: &mut AppContext) -> Result<()> {
        app.set_components(*self);
        Ok(())
    }
}
