//! Theme management and ANSI escape sequence generation.
//!
//! Themes are TOML documents with a `[colors]` table for UI elements and an
//! optional `[categories]` table mapping category labels to badge colors.
//! Labels missing from the table use `colors.category_fallback`.
//!
//! # Built-in Themes
//!
//! - `slate`: Slate and indigo dark theme (default)
//! - `catppuccin-mocha`: Warm dark pastels
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#f8fafc"
//! accent = "#6366f1"
//! # ... every field of ThemeColors
//! category_fallback = "#cbd5e1"
//!
//! [categories]
//! Frontend = "#60a5fa"
//! Backend = "#fbbf24"
//! ```

use crate::domain::error::{PromptfolioError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Name of the theme used when none is configured.
pub const DEFAULT_THEME: &str = "slate";

/// Color scheme for UI rendering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
    /// Category label to badge color.
    #[serde(default)]
    pub categories: BTreeMap<String, String>,
}

/// Hex colors (e.g. `"#6366f1"`) for every UI element.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    pub header_fg: String,
    #[serde(default)]
    pub header_bg: Option<String>,

    /// Active chip, focused search border, current page.
    pub accent: String,

    /// Card under the cursor.
    pub selection_fg: String,
    pub selection_bg: String,

    pub text_normal: String,
    pub text_dim: String,
    pub border: String,

    pub search_bar_border: String,
    pub match_highlight_fg: String,
    pub match_highlight_bg: String,

    pub chip_active_fg: String,
    pub chip_fg: String,

    pub empty_state_fg: String,

    /// Detail overlay content color.
    pub content_fg: String,

    pub toast_fg: String,
    pub toast_bg: String,

    pub error_fg: String,

    /// Badge color for categories missing from `[categories]`.
    pub category_fallback: String,
}

impl Theme {
    /// Loads a built-in theme by name, `None` if unknown.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "slate" => include_str!("../../themes/slate.toml"),
            "catppuccin-mocha" => include_str!("../../themes/catppuccin-mocha.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`PromptfolioError::Theme`] if the file cannot be read or parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| PromptfolioError::Theme(format!("failed to read theme file: {e}")))?;

        toml::from_str(&contents)
            .map_err(|e| PromptfolioError::Theme(format!("failed to parse theme TOML: {e}")))
    }

    /// Badge color for a category label.
    #[must_use]
    pub fn category_color(&self, category: &str) -> &str {
        self.categories
            .get(category)
            .map_or(self.colors.category_fallback.as_str(), String::as_str)
    }

    /// Parses `#rrggbb`; malformed input yields white.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim().trim_start_matches('#');

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).unwrap_or(255);
        (channel(0..2), channel(2..4), channel(4..6))
    }

    /// 24-bit foreground escape sequence.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// 24-bit background escape sequence.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    #[must_use]
    pub const fn italic() -> &'static str {
        "\u{001b}[3m"
    }

    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// Returns the `slate` theme.
    ///
    /// # Panics
    ///
    /// Panics if the built-in theme fails to parse, which the tests rule out.
    fn default() -> Self {
        Self::from_name(DEFAULT_THEME).expect("built-in slate theme should always parse")
    }
}
