//! Color resolution.
//!
//! A color is picked per request from three tiers, highest precedence first:
//!
//! 1. a non-empty configured override (`COLOR`), returned verbatim
//! 2. the `color` of the first [`ColorParameters`] record in the request body
//! 3. a uniform draw from the [`Palette`] through a [`ColorSource`]

use std::fmt;

use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Colors served when nothing else is configured.
pub const DEFAULT_COLORS: [&str; 6] = ["red", "orange", "yellow", "green", "blue", "purple"];

/// Color returned by random selection when the palette is empty.
pub const FALLBACK_COLOR: &str = "blue";

/// One element of the request body array.
///
/// Only `color` influences resolution; `delayLength` is accepted and kept
/// but has no effect on the response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ColorParameters {
    #[serde(default)]
    pub color: String,
    #[serde(rename = "delayLength", default)]
    pub delay_length: f64,
}

impl ColorParameters {
    pub fn new(color: impl Into<String>) -> Self {
        Self {
            color: color.into(),
            delay_length: 0.0,
        }
    }
}

/// Ordered set of colors backing random selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Palette(Vec<String>);

impl Palette {
    pub fn new<I, S>(colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(colors.into_iter().map(Into::into).collect())
    }

    /// A palette with no colors; random picks from it fall back to [`FALLBACK_COLOR`].
    pub const fn empty() -> Self {
        Self(Vec::new())
    }

    pub fn contains(&self, color: &str) -> bool {
        self.0.iter().any(|c| c == color)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(DEFAULT_COLORS)
    }
}

/// Draw one color uniformly from `palette`, or [`FALLBACK_COLOR`] if it is empty.
pub fn random_color(palette: &Palette) -> String {
    palette
        .as_slice()
        .choose(&mut rand::thread_rng())
        .cloned()
        .unwrap_or_else(|| FALLBACK_COLOR.to_string())
}

/// Strategy for the lowest-precedence tier of resolution.
pub trait ColorSource: Send + Sync {
    fn pick(&self) -> String;
}

/// Uniform random selection from a palette.
#[derive(Debug, Clone, Default)]
pub struct RandomColor {
    palette: Palette,
}

impl RandomColor {
    pub const fn new(palette: Palette) -> Self {
        Self { palette }
    }
}

impl ColorSource for RandomColor {
    fn pick(&self) -> String {
        random_color(&self.palette)
    }
}

/// Always yields the same color.
#[derive(Debug, Clone)]
pub struct FixedColor(pub String);

impl ColorSource for FixedColor {
    fn pick(&self) -> String {
        self.0.clone()
    }
}

/// Which tier produced a resolved color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorOrigin {
    Override,
    Parameters,
    Random,
}

impl fmt::Display for ColorOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Override => "override",
            Self::Parameters => "parameters",
            Self::Random => "random",
        };
        f.write_str(name)
    }
}

/// A resolved color together with the tier it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub color: String,
    pub origin: ColorOrigin,
}

/// Resolve a color and report which tier supplied it.
pub fn resolve(
    color_override: Option<&str>,
    params: &[ColorParameters],
    source: &dyn ColorSource,
) -> Resolution {
    if let Some(color) = color_override.filter(|c| !c.is_empty()) {
        trace!(color, "Using configured override");
        return Resolution {
            color: color.to_string(),
            origin: ColorOrigin::Override,
        };
    }

    if let Some(first) = params.first() {
        trace!(color = %first.color, count = params.len(), "Using request parameters");
        return Resolution {
            color: first.color.clone(),
            origin: ColorOrigin::Parameters,
        };
    }

    Resolution {
        color: source.pick(),
        origin: ColorOrigin::Random,
    }
}

/// Resolve a color through the override, request parameters and `source`.
pub fn resolve_color(
    color_override: Option<&str>,
    params: &[ColorParameters],
    source: &dyn ColorSource,
) -> String {
    resolve(color_override, params, source).color
}
