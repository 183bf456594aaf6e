// Copyright 2025 the Yakumono Authors
// SPDX-License-Identifier: Apache-2.0

//! Application state

use std::path::Path;

use xilem::WindowId;

use crate::composer::KerningMode;
use crate::config::{ConfigError, YakumonoConfig};
use crate::settings;
use crate::text_style::TextStyle;

/// Main application state
pub struct AppState {
    /// Text shown in the preview
    pub text: String,

    /// Resolved font, size and color
    pub style: TextStyle,

    /// Line limit, `None` for unbounded
    pub max_lines: Option<usize>,

    pub kerning: KerningMode,

    /// Error message to display, if any
    pub error_message: Option<String>,

    /// Whether the app should keep running
    pub running: bool,

    /// Main window ID (stable across rebuilds to prevent window
    /// recreation)
    pub main_window_id: WindowId,
}

impl AppState {
    /// Create the state for the built-in sample text
    pub fn new() -> Self {
        Self {
            text: settings::preview::TEXT.to_string(),
            style: TextStyle::default(),
            max_lines: None,
            kerning: KerningMode::default(),
            error_message: None,
            running: true,
            main_window_id: WindowId::next(),
        }
    }

    /// Apply a parsed config on top of the current state.
    ///
    /// Nothing is changed if the config does not resolve to a valid style.
    pub fn apply_config(&mut self, config: &YakumonoConfig) -> Result<(), ConfigError> {
        let style = config.text_style()?;
        if !config.text.is_empty() {
            self.text = config.text.clone();
        }
        self.style = style;
        self.max_lines = config.max_lines;
        self.kerning = config.kerning();
        self.error_message = None;
        Ok(())
    }

    /// Load a TOML config file, keeping the error for display on failure
    pub fn load_config(&mut self, path: &Path) {
        let result = YakumonoConfig::load(path).and_then(|config| self.apply_config(&config));
        match result {
            Ok(()) => tracing::info!("Applied config from {}", path.display()),
            Err(e) => {
                tracing::error!("Failed to load {}: {}", path.display(), e);
                self.error_message = Some(e.to_string());
            }
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Implement the Xilem AppState trait
impl xilem::AppState for AppState {
    fn keep_running(&self) -> bool {
        self.running
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_shows_sample() {
        let state = AppState::new();
        assert_eq!(state.text, settings::preview::TEXT);
        assert!(state.running);
        assert!(state.error_message.is_none());
    }

    #[test]
    fn test_apply_config() {
        let mut state = AppState::new();
        let config =
            YakumonoConfig::from_toml("text = \"「あ」\"\nmax_lines = 2\nkerning_first_only = true")
                .unwrap();
        state.apply_config(&config).unwrap();
        assert_eq!(state.text, "「あ」");
        assert_eq!(state.max_lines, Some(2));
        assert_eq!(state.kerning, KerningMode::FirstGlyphOnly);
    }

    #[test]
    fn test_empty_config_text_keeps_sample() {
        let mut state = AppState::new();
        state.apply_config(&YakumonoConfig::default()).unwrap();
        assert_eq!(state.text, settings::preview::TEXT);
    }

    #[test]
    fn test_invalid_config_leaves_state() {
        let mut state = AppState::new();
        let config = YakumonoConfig::from_toml("text = \"x\"\ntext_color = \"red\"").unwrap();
        assert!(state.apply_config(&config).is_err());
        assert_eq!(state.text, settings::preview::TEXT);
    }

    #[test]
    fn test_load_missing_config_sets_error() {
        let mut state = AppState::new();
        state.load_config(Path::new("/nonexistent/yakumono.toml"));
        assert!(state.error_message.is_some());
        assert_eq!(state.text, settings::preview::TEXT);
    }
}
