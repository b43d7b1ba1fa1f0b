//! Service configuration.
//!
//! Settings are layered: built-in defaults, then an optional TOML file,
//! then environment variables (`COLOR`, `LATENCY`, `ERROR_RATE`), then
//! CLI flags applied by the binary.

mod loader;

pub use loader::{ENV_COLOR, ENV_ERROR_RATE, ENV_LATENCY};

use serde::{Deserialize, Serialize};

use crate::color::Palette;

pub const DEFAULT_BIND: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;

/// Effective configuration handed to the request handler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServiceConfig {
    /// Override color; empty means no override.
    pub color: String,
    /// Reserved. Read from `LATENCY` but has no effect on responses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latency: Option<String>,
    /// Reserved. Read from `ERROR_RATE` but has no effect on responses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_rate: Option<String>,
    /// Colors available to random selection.
    pub palette: Palette,
    pub bind: String,
    pub port: u16,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            color: String::new(),
            latency: None,
            error_rate: None,
            palette: Palette::default(),
            bind: DEFAULT_BIND.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServiceConfig {
    /// The configured override, if it is non-empty.
    pub fn color_override(&self) -> Option<&str> {
        Some(self.color.as_str()).filter(|c| !c.is_empty())
    }

    /// Builder-style override setter, mostly for tests.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// `bind:port` listen address.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.bind, self.port)
    }
}
