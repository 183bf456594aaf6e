// Copyright 2025 the Yakumono Authors
// SPDX-License-Identifier: Apache-2.0

//! Resolved text attributes: font, size in pixels, and color.

use peniko::Color;
use serde::Deserialize;

use crate::settings;

/// Font style, as a combination of weight and slant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontStyle {
    #[default]
    Normal,
    Bold,
    Italic,
    BoldItalic,
}

impl FontStyle {
    pub fn is_bold(&self) -> bool {
        matches!(self, Self::Bold | Self::BoldItalic)
    }

    pub fn is_italic(&self) -> bool {
        matches!(self, Self::Italic | Self::BoldItalic)
    }

    /// Get a short name for display
    pub fn name(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Bold => "bold",
            Self::Italic => "italic",
            Self::BoldItalic => "bold_italic",
        }
    }
}

/// Everything the font oracles and the painter need to know about the
/// active font.
#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    /// Named font family, or `None` for the system sans-serif
    pub font_family: Option<String>,
    pub font_style: FontStyle,
    /// Font size in pixels
    pub font_size: f64,
    pub color: Color,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_family: None,
            font_style: FontStyle::Normal,
            font_size: sp_to_px(settings::text::SIZE, settings::text::DISPLAY_SCALE),
            color: crate::theme::text::DEFAULT,
        }
    }
}

impl TextStyle {
    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = Some(family.into());
        self
    }

    pub fn with_font_style(mut self, font_style: FontStyle) -> Self {
        self.font_style = font_style;
        self
    }
}

/// Convert a scale-independent text size to pixels.
pub fn sp_to_px(size: f64, display_scale: f64) -> f64 {
    size * display_scale
}
