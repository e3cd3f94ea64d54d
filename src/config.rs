//
//  config.rs
//  saloon-inspect
//

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

/// Default config file name, looked up in the project root.
pub const CONFIG_FILE: &str = "saloon.toml";

/// Widest line the renderer will ever produce.
pub const MAX_WIDTH: usize = 150;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SaloonConfig {
    #[serde(default)]
    pub integrations: IntegrationsConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Where integrations live and how they are named.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntegrationsConfig {
    /// Integrations directory (relative to the project root).
    #[serde(default = "default_path")]
    pub path: String,
    /// File name suffix that marks a connector at an integration's root.
    #[serde(default = "default_connector_suffix")]
    pub connector_suffix: String,
    /// Namespace prefix for generated classes.
    #[serde(default = "default_namespace")]
    pub namespace: String,
}

/// Console rendering settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Fixed render width. Falls back to `$COLUMNS`, the terminal width, then 80.
    #[serde(default)]
    pub width: Option<usize>,
    /// Emit ANSI colors.
    #[serde(default = "default_color")]
    pub color: bool,
}

fn default_path() -> String {
    "app/Http/Integrations".to_string()
}

fn default_connector_suffix() -> String {
    "Connector.php".to_string()
}

fn default_namespace() -> String {
    "App\\Http\\Integrations".to_string()
}

fn default_color() -> bool {
    true
}

impl Default for IntegrationsConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            connector_suffix: default_connector_suffix(),
            namespace: default_namespace(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            width: None,
            color: default_color(),
        }
    }
}

impl SaloonConfig {
    /// Load config from a TOML file, falling back to defaults.
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(contents) => toml::from_str(&contents).unwrap_or_else(|e| {
                warn!(path = %path.display(), error = %e, "ignoring malformed config");
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    /// Resolve the integrations directory relative to the project root.
    pub fn resolve_integrations_path(&self, root: &Path) -> PathBuf {
        root.join(&self.integrations.path)
    }

    /// Effective render width: configured, then `$COLUMNS`, then the
    /// terminal's own width, then 80. Never wider than [`MAX_WIDTH`].
    pub fn resolve_width(&self) -> usize {
        self.width_from(std::env::var("COLUMNS").ok(), terminal_width())
    }

    fn width_from(&self, columns: Option<String>, terminal: Option<usize>) -> usize {
        self.output
            .width
            .or_else(|| columns.and_then(|c| c.trim().parse().ok()))
            .or(terminal)
            .unwrap_or(80)
            .min(MAX_WIDTH)
    }
}

/// Width of the attached terminal, if there is one.
fn terminal_width() -> Option<usize> {
    crossterm::terminal::size()
        .ok()
        .map(|(cols, _)| usize::from(cols))
        .filter(|cols| *cols > 0)
}
