// Copyright 2025 the Yakumono Authors
// SPDX-License-Identifier: Apache-2.0

//! Line composer and bracket kerning.
//!
//! Walks a token sequence, wrapping greedily whenever a whole token would
//! overflow the width budget, and advances a pen across every code point.
//! Opening brackets are pulled left by half their advance before they are
//! drawn, and closing brackets / punctuation pull the pen back by half
//! their advance after they are drawn, so the next glyph tucks into the
//! built-in whitespace of the full-width cell.
//!
//! # Measuring and drawing
//!
//! [`LineComposer::measure`] and [`LineComposer::render`] run the same
//! pass; `render` additionally reports each glyph to a [`GlyphSink`]. The
//! measured line count therefore always matches the number of drawn lines.
//!
//! # Truncation
//!
//! When a wrap would exceed `max_lines`, composition stops and the
//! remaining tokens are dropped. [`Measurement::truncated`] reports this.

use crate::glyph_class::{GlyphClass, glyph_class};
use crate::metrics::FontMetrics;
use crate::settings;
use crate::tokenizer::Token;

/// Which glyphs receive bracket kerning.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum KerningMode {
    /// Kern every opening and closing glyph
    #[default]
    EveryGlyph,
    /// Kern only the first code point of the text, if it is eligible
    FirstGlyphOnly,
}

impl KerningMode {
    pub fn from_first_only(first_only: bool) -> Self {
        if first_only {
            Self::FirstGlyphOnly
        } else {
            Self::EveryGlyph
        }
    }
}

/// Constraints for one composition pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutParams {
    /// Width budget in pixels
    pub max_width: f64,
    /// Maximum number of lines, `None` for unbounded
    pub max_lines: Option<usize>,
    /// Font size in pixels; also the baseline of the first line
    pub font_size: f64,
    pub kerning: KerningMode,
}

impl LayoutParams {
    pub fn new(max_width: f64, font_size: f64) -> Self {
        Self {
            max_width,
            max_lines: None,
            font_size,
            kerning: KerningMode::EveryGlyph,
        }
    }

    pub fn with_max_lines(mut self, max_lines: Option<usize>) -> Self {
        self.max_lines = max_lines;
        self
    }

    pub fn with_kerning(mut self, kerning: KerningMode) -> Self {
        self.kerning = kerning;
        self
    }
}

/// A glyph placed at its baseline origin.
#[derive(Clone, Debug, PartialEq)]
pub struct PositionedGlyph {
    /// Left edge in pixels
    pub x: f64,
    /// Baseline in pixels
    pub y: f64,
    /// A single code point
    pub glyph: String,
}

/// Receives glyphs in drawing order.
pub trait GlyphSink {
    fn glyph(&mut self, x: f64, y: f64, glyph: &str);
}

impl GlyphSink for Vec<PositionedGlyph> {
    fn glyph(&mut self, x: f64, y: f64, glyph: &str) {
        self.push(PositionedGlyph {
            x,
            y,
            glyph: glyph.to_string(),
        });
    }
}

/// Result of measuring a token sequence.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Measurement {
    /// Lines used, 0 for empty text
    pub line_count: usize,
    /// Total height in pixels, 0 for empty text
    pub height: f64,
    /// Whether tokens were dropped because of `max_lines`
    pub truncated: bool,
}

/// State at the end of one pass.
#[derive(Clone, Copy, Debug, PartialEq)]
struct PassOutcome {
    line_count: usize,
    /// Pen position after the last drawn glyph
    pen_x: f64,
    truncated: bool,
}

/// Greedy line composer with bracket kerning.
#[derive(Clone, Debug)]
pub struct LineComposer<M> {
    metrics: M,
    params: LayoutParams,
}

impl<M: FontMetrics> LineComposer<M> {
    pub fn new(metrics: M, params: LayoutParams) -> Self {
        Self { metrics, params }
    }

    /// Extra space inserted between lines.
    pub fn line_gap(&self) -> f64 {
        (self.metrics.line_height() / settings::line::GAP_DIVISOR).floor()
    }

    /// Total height of `line_count` lines.
    pub fn height_for_lines(&self, line_count: usize) -> f64 {
        if line_count == 0 {
            return 0.0;
        }
        let lines = line_count as f64;
        lines * self.metrics.line_height() + (lines - 1.0) * self.line_gap()
    }

    /// Count lines and total height without drawing.
    ///
    /// A token only wraps if the current line already holds a glyph, so a
    /// token wider than `max_width` overflows its line instead of leaving
    /// an empty one above it.
    pub fn measure(&self, tokens: &[Token]) -> Measurement {
        if tokens.is_empty() {
            return Measurement::default();
        }
        let outcome = self.compose(tokens, None);
        tracing::debug!(
            "Measured {} tokens into {} lines, last line ends at {:.1}",
            tokens.len(),
            outcome.line_count,
            outcome.pen_x
        );
        Measurement {
            line_count: outcome.line_count,
            height: self.height_for_lines(outcome.line_count),
            truncated: outcome.truncated,
        }
    }

    /// Report every glyph to `sink` and return the number of lines drawn.
    pub fn render(&self, tokens: &[Token], sink: &mut dyn GlyphSink) -> usize {
        if tokens.is_empty() {
            return 0;
        }
        self.compose(tokens, Some(sink)).line_count
    }

    /// Collect the positioned glyphs of a pass.
    pub fn layout(&self, tokens: &[Token]) -> Vec<PositionedGlyph> {
        let mut glyphs: Vec<PositionedGlyph> = Vec::new();
        self.render(tokens, &mut glyphs);
        glyphs
    }

    /// The shared pass. Wrapping requires a non-empty current line.
    fn compose(&self, tokens: &[Token], mut sink: Option<&mut dyn GlyphSink>) -> PassOutcome {
        let line_height = self.metrics.line_height();
        let line_gap = self.line_gap();
        let max_lines = self.params.max_lines.unwrap_or(usize::MAX);

        let mut line_count = 1;
        let mut x = 0.0;
        let mut y = self.params.font_size;
        let mut line_has_glyphs = false;

        for (i, token) in tokens.iter().enumerate() {
            let token_width = self.metrics.advance_width(token.as_str());

            // An empty line keeps an over-wide token and lets it overflow.
            if line_has_glyphs && x + token_width > self.params.max_width {
                if line_count + 1 > max_lines {
                    tracing::debug!(
                        "Truncated at {} lines, dropped {} of {} tokens",
                        line_count,
                        tokens.len() - i,
                        tokens.len()
                    );
                    return PassOutcome {
                        line_count,
                        pen_x: x,
                        truncated: true,
                    };
                }
                line_count += 1;
                x = 0.0;
                y += line_height + line_gap;
                line_has_glyphs = false;
                tracing::trace!("Wrapped before {:?} onto line {}", token.as_str(), line_count);
            }

            let text = token.as_str();
            for (j, (offset, c)) in text.char_indices().enumerate() {
                let glyph = &text[offset..offset + c.len_utf8()];
                let glyph_width = self.metrics.advance_width(glyph);
                let class = glyph_class(c);
                let kerning = if class.is_kernable() {
                    glyph_width / 2.0
                } else {
                    0.0
                };
                let apply = match self.params.kerning {
                    KerningMode::EveryGlyph => true,
                    KerningMode::FirstGlyphOnly => i == 0 && j == 0,
                };

                if apply && class == GlyphClass::Opening {
                    x -= kerning;
                }
                if let Some(sink) = sink.as_deref_mut() {
                    sink.glyph(x, y, glyph);
                }
                if apply && class == GlyphClass::Closing {
                    x -= kerning;
                }
                x += glyph_width;
                line_has_glyphs = true;
            }
        }

        PassOutcome {
            line_count,
            pen_x: x,
            truncated: false,
        }
    }
}
