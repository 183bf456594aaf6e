// Copyright 2025 the Yakumono Authors
// SPDX-License-Identifier: Apache-2.0

//! UI components for the Yakumono text preview

pub mod kerned_text_widget;

pub use kerned_text_widget::{KernedTextView, KernedTextWidget, kerned_text};
