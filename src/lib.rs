// Copyright 2025 the Yakumono Authors
// SPDX-License-Identifier: Apache-2.0

//! Yakumono: Japanese text layout with bracket kerning, built with Xilem
//!
//! The layout engine splits text into unbreakable tokens, wraps them
//! greedily into a width, and pulls opening and closing brackets in by
//! half their advance so full-width punctuation does not leave gaps.
//! [`KernedTextWidget`] puts the engine on screen with Parley and Masonry.

use std::path::PathBuf;

use anyhow::Context;
use winit::dpi::LogicalSize;
use winit::error::EventLoopError;
use xilem::{EventLoopBuilder, WindowView, Xilem, window};

pub mod components;
pub mod composer;
pub mod config;
pub mod glyph_class;
pub mod metrics;
pub mod model;
pub mod settings;
pub mod text_style;
pub mod theme;
pub mod tokenizer;

mod data;
mod views;

pub use components::{KernedTextView, KernedTextWidget, kerned_text};
pub use composer::{
    GlyphSink, KerningMode, LayoutParams, LineComposer, Measurement, PositionedGlyph,
};
pub use config::{ConfigError, YakumonoConfig};
pub use glyph_class::{GlyphClass, glyph_class};
pub use metrics::{CachedMetrics, FixedMetrics, FontMetrics, ParleyMetrics};
pub use model::KernedText;
pub use text_style::{FontStyle, TextStyle};
pub use tokenizer::{Token, TokenKind, tokenize, tokenize_utf16};

use data::AppState;
use views::preview;

/// Log filter used when `RUST_LOG` is unset or invalid
const DEFAULT_LOG_FILTER: &str = "yakumono=info,wgpu=warn,naga=warn,wgpu_core=warn,wgpu_hal=warn";

/// Entry point for the Yakumono preview application
pub fn run(event_loop: EventLoopBuilder) -> Result<(), EventLoopError> {
    // Initialize tracing subscriber (can be controlled via RUST_LOG env var)
    // Filter out noisy wgpu/naga shader compilation logs
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let mut initial_state = AppState::new();

    // Check for command-line argument (config path)
    handle_command_line_args(&mut initial_state);

    let app = Xilem::new(initial_state, app_logic);
    app.run_in(event_loop)?;
    Ok(())
}

/// Handle command-line arguments to load a TOML config file
fn handle_command_line_args(initial_state: &mut AppState) {
    match config_path_from_args(std::env::args().skip(1)) {
        Ok(Some(path)) => {
            tracing::info!("Loading config from: {}", path.display());
            initial_state.load_config(&path);
        }
        Ok(None) => {}
        Err(e) => {
            tracing::error!("{e:#}");
            tracing::error!("Usage: yakumono [path/to/config.toml]");
            initial_state.error_message = Some(format!("{e:#}"));
        }
    }
}

/// The first argument, if any, checked to name an existing file
fn config_path_from_args(
    mut args: impl Iterator<Item = String>,
) -> anyhow::Result<Option<PathBuf>> {
    let Some(arg) = args.next() else {
        return Ok(None);
    };
    let path = PathBuf::from(arg);
    let metadata = std::fs::metadata(&path)
        .with_context(|| format!("Config path {} is not readable", path.display()))?;
    anyhow::ensure!(metadata.is_file(), "Config path {} is not a file", path.display());
    Ok(Some(path))
}

/// Build the single preview window
fn app_logic(state: &mut AppState) -> impl Iterator<Item = WindowView<AppState>> + use<> {
    let window_size = LogicalSize::new(
        settings::preview::WINDOW_WIDTH,
        settings::preview::WINDOW_HEIGHT,
    );
    let window_view = window(state.main_window_id, "Yakumono", preview(state));
    let window_with_options = window_view.with_options(|options| {
        options
            .with_initial_inner_size(window_size)
            .on_close(|state: &mut AppState| state.running = false)
    });

    std::iter::once(window_with_options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_config_argument() {
        assert!(config_path_from_args(std::iter::empty()).unwrap().is_none());
    }

    #[test]
    fn test_missing_config_argument() {
        let args = ["/nonexistent/yakumono.toml".to_string()].into_iter();
        let err = config_path_from_args(args).unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/yakumono.toml"));
    }

    #[test]
    fn test_directory_config_argument() {
        let dir = std::env::temp_dir().display().to_string();
        assert!(config_path_from_args([dir].into_iter()).is_err());
    }

    #[test]
    fn test_default_log_filter_parses() {
        assert!(tracing_subscriber::EnvFilter::try_new(DEFAULT_LOG_FILTER).is_ok());
    }
}
