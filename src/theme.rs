// Copyright 2025 the Yakumono Authors
// SPDX-License-Identifier: Apache-2.0

//! Theme colors and constants
//!
//! All colors use hexadecimal format: Color::from_rgb8(0xRR, 0xGG, 0xBB)

use masonry::vello::peniko::Color;

// ============================================================================
// BASE COLORS
// ============================================================================
const BASE_A: Color = Color::from_rgb8(0x00, 0x00, 0x00);
const BASE_M: Color = Color::from_rgb8(0xd0, 0xd0, 0xd0);
const BASE_O: Color = Color::from_rgb8(0xf6, 0xf4, 0xee);
const BASE_R: Color = Color::from_rgb8(0xb0, 0x30, 0x30);

// ============================================================================
// PREVIEW
// ============================================================================
const PREVIEW_BACKGROUND: Color = BASE_O;
const PREVIEW_OUTLINE: Color = BASE_M;

// ============================================================================
// TEXT
// ============================================================================
const DEFAULT_TEXT: Color = BASE_A;
const ERROR_TEXT: Color = BASE_R;

// ============================================================================
// PUBLIC API - Don't edit below this line unless you know what you're doing
// ============================================================================

/// Preview window colors
pub mod preview {
    use super::Color;
    pub const BACKGROUND: Color = super::PREVIEW_BACKGROUND;
    pub const OUTLINE: Color = super::PREVIEW_OUTLINE;
}

/// Text colors
pub mod text {
    use super::Color;
    /// Used when a text color is not configured
    pub const DEFAULT: Color = super::DEFAULT_TEXT;
    /// Config load failures shown above the preview
    pub const ERROR: Color = super::ERROR_TEXT;
}
