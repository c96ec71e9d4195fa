//! Application shell configuration types

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_MOUNT_TARGET, DEFAULT_START_ROUTE};

/// Color theme installed by the component library
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Light palette
    Light,
    /// Dark palette
    #[default]
    Dark,
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Light => f.write_str("light"),
            Theme::Dark => f.write_str("dark"),
        }
    }
}

/// Application shell configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Anchor the application mounts into, in `#id` form
    pub mount_target: String,

    /// Theme installed by the component library
    pub theme: Theme,

    /// Route opened when none is requested
    pub start_route: String,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            mount_target: DEFAULT_MOUNT_TARGET.to_string(),
            theme: Theme::default(),
            start_route: DEFAULT_START_ROUTE.to_string(),
        }
    }
}
