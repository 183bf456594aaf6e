// Copyright 2025 the Yakumono Authors
// SPDX-License-Identifier: Apache-2.0

//! Text attributes loaded from a TOML file.
//!
//! Every field is optional:
//!
//! ```toml
//! text = "「こんにちは。」"
//! text_color = "#000000"        # #RRGGBB or #AARRGGBB
//! text_size = 12.0              # scale-independent units
//! font_family = "Noto Sans JP"  # omit for the system sans-serif
//! font_style = "bold"           # normal | bold | italic | bold_italic
//! max_lines = 3                 # omit for unbounded
//! kerning_first_only = false
//! display_scale = 2.0           # pixels per scale-independent unit
//! ```

use std::path::Path;

use peniko::Color;
use serde::Deserialize;
use thiserror::Error;

use crate::composer::KerningMode;
use crate::settings;
use crate::text_style::{FontStyle, TextStyle, sp_to_px};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid color {0:?}, expected #RRGGBB or #AARRGGBB")]
    InvalidColor(String),

    #[error("Invalid text size {0}, expected a positive number")]
    InvalidTextSize(f64),
}

/// Configuration surface of the text widget.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct YakumonoConfig {
    pub text: String,
    pub text_color: String,
    /// Text size in scale-independent units
    pub text_size: f64,
    pub font_family: Option<String>,
    pub font_style: FontStyle,
    pub max_lines: Option<usize>,
    pub kerning_first_only: bool,
    /// Pixels per scale-independent unit
    pub display_scale: f64,
}

impl Default for YakumonoConfig {
    fn default() -> Self {
        Self {
            text: String::new(),
            text_color: settings::text::COLOR.to_string(),
            text_size: settings::text::SIZE,
            font_family: None,
            font_style: FontStyle::Normal,
            max_lines: None,
            kerning_first_only: false,
            display_scale: settings::text::DISPLAY_SCALE,
        }
    }
}

impl YakumonoConfig {
    /// Read and parse a TOML config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_toml(&source)?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    /// Resolve colors and sizes into a [`TextStyle`].
    pub fn text_style(&self) -> Result<TextStyle, ConfigError> {
        let font_size = sp_to_px(self.text_size, self.display_scale);
        if !font_size.is_finite() || font_size <= 0.0 {
            return Err(ConfigError::InvalidTextSize(font_size));
        }
        let mut style = TextStyle::default()
            .with_font_size(font_size)
            .with_font_style(self.font_style)
            .with_color(parse_hex_color(&self.text_color)?);
        if let Some(family) = &self.font_family {
            style = style.with_font_family(family.clone());
        }
        Ok(style)
    }

    pub fn kerning(&self) -> KerningMode {
        KerningMode::from_first_only(self.kerning_first_only)
    }
}

/// Parse `#RRGGBB` or `#AARRGGBB` (alpha first).
pub fn parse_hex_color(s: &str) -> Result<Color, ConfigError> {
    let invalid = || ConfigError::InvalidColor(s.to_string());

    let hex = s.trim().strip_prefix('#').ok_or_else(invalid)?;
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }
    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());

    match hex.len() {
        6 => Ok(Color::from_rgb8(byte(0)?, byte(2)?, byte(4)?)),
        8 => Ok(Color::from_rgba8(byte(2)?, byte(4)?, byte(6)?, byte(0)?)),
        _ => Err(invalid()),
    }
}
