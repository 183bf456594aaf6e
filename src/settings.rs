// Copyright 2025 the Yakumono Authors
// SPDX-License-Identifier: Apache-2.0

//! Layout defaults and configuration constants.
//!
//! This module holds non-visual settings that stay stable across theme
//! changes. Visual styling (colors) belongs in `theme.rs`.

// ============================================================================
// TEXT DEFAULTS
// ============================================================================
/// Default text size in scale-independent units
const DEFAULT_TEXT_SIZE: f64 = 12.0;

/// Default pixels per scale-independent unit
const DEFAULT_DISPLAY_SCALE: f64 = 1.0;

/// Default text color as written in config files
const DEFAULT_TEXT_COLOR: &str = "#000000";

// ============================================================================
// LINE METRICS
// ============================================================================
/// Glyph laid out to measure the line height of a font.
///
/// A full-width kana gives the ascent and descent of the CJK face
/// rather than a Latin fallback.
const REFERENCE_GLYPH: &str = "あ";

/// Extra space between lines is `floor(line_height / LINE_GAP_DIVISOR)`
const LINE_GAP_DIVISOR: f64 = 10.0;

/// Entries kept by the width cache before it is cleared
const WIDTH_CACHE_CAPACITY: usize = 4096;

// ============================================================================
// PREVIEW WINDOW
// ============================================================================
const WINDOW_WIDTH: f64 = 640.0;
const WINDOW_HEIGHT: f64 = 480.0;

/// Inset of the preview text from the window edge
const PREVIEW_PADDING: f64 = 24.0;

/// Text shown when no config file is given
const PREVIEW_TEXT: &str = "「こんにちは。」（Hello、World）【吾輩は猫である。名前はまだ無い。】『どこで生れたかとんと見当がつかぬ。』";

// ============================================================================
// PUBLIC API - Don't edit below this line unless you know what you're doing
// ============================================================================

/// Text attribute defaults
pub mod text {
    /// Text size in scale-independent units
    pub const SIZE: f64 = super::DEFAULT_TEXT_SIZE;

    /// Pixels per scale-independent unit
    pub const DISPLAY_SCALE: f64 = super::DEFAULT_DISPLAY_SCALE;

    /// Text color (`#RRGGBB`)
    pub const COLOR: &str = super::DEFAULT_TEXT_COLOR;
}

/// Line metric settings shared by measuring and drawing
pub mod line {
    /// Reference glyph for line height measurement
    pub const REFERENCE_GLYPH: &str = super::REFERENCE_GLYPH;

    /// Divisor for the inter-line gap
    pub const GAP_DIVISOR: f64 = super::LINE_GAP_DIVISOR;
}

/// Font measurement settings
pub mod metrics {
    pub const WIDTH_CACHE_CAPACITY: usize = super::WIDTH_CACHE_CAPACITY;
}

/// Preview window settings
pub mod preview {
    pub const WINDOW_WIDTH: f64 = super::WINDOW_WIDTH;
    pub const WINDOW_HEIGHT: f64 = super::WINDOW_HEIGHT;
    pub const PADDING: f64 = super::PREVIEW_PADDING;
    pub const TEXT: &str = super::PREVIEW_TEXT;
}
