// Copyright 2025 the Yakumono Authors
// SPDX-License-Identifier: Apache-2.0

//! Text model behind the kerned text widget.
//!
//! `KernedText` owns the text, its memoized token sequence, and the layout
//! attributes. Tokens are derived from the text and replaced wholesale
//! whenever the text changes; every measure and every draw reruns the
//! line composer against the width available at that moment.

use crate::composer::{GlyphSink, KerningMode, LayoutParams, LineComposer, Measurement};
use crate::config::{ConfigError, YakumonoConfig};
use crate::metrics::FontMetrics;
use crate::text_style::TextStyle;
use crate::tokenizer::{Token, tokenize};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct KernedText {
    text: String,
    tokens: Vec<Token>,
    style: TextStyle,
    max_lines: Option<usize>,
    kerning: KerningMode,
}

impl KernedText {
    pub fn new(text: impl Into<String>) -> Self {
        let mut model = Self::default();
        model.set_text(text);
        model
    }

    pub fn from_config(config: &YakumonoConfig) -> Result<Self, ConfigError> {
        Ok(Self::new(config.text.clone())
            .with_style(config.text_style()?)
            .with_max_lines(config.max_lines)
            .with_kerning(config.kerning()))
    }

    pub fn with_style(mut self, style: TextStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_max_lines(mut self, max_lines: Option<usize>) -> Self {
        self.max_lines = max_lines;
        self
    }

    pub fn with_kerning(mut self, kerning: KerningMode) -> Self {
        self.kerning = kerning;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the text and recompute its tokens.
    ///
    /// Returns `false` if the text was unchanged.
    pub fn set_text(&mut self, text: impl Into<String>) -> bool {
        let text = text.into();
        if text == self.text {
            return false;
        }
        self.tokens = tokenize(&text);
        self.text = text;
        tracing::debug!(
            "Tokenized {} code points into {} tokens",
            self.text.chars().count(),
            self.tokens.len()
        );
        true
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn style(&self) -> &TextStyle {
        &self.style
    }

    pub fn set_style(&mut self, style: TextStyle) {
        self.style = style;
    }

    pub fn max_lines(&self) -> Option<usize> {
        self.max_lines
    }

    pub fn set_max_lines(&mut self, max_lines: Option<usize>) {
        self.max_lines = max_lines;
    }

    pub fn kerning(&self) -> KerningMode {
        self.kerning
    }

    pub fn set_kerning(&mut self, kerning: KerningMode) {
        self.kerning = kerning;
    }

    fn composer<M: FontMetrics>(&self, metrics: M, max_width: f64) -> LineComposer<M> {
        let params = LayoutParams::new(max_width, self.style.font_size)
            .with_max_lines(self.max_lines)
            .with_kerning(self.kerning);
        LineComposer::new(metrics, params)
    }

    /// Lines and height when laid out in `max_width`.
    pub fn measure(&self, metrics: impl FontMetrics, max_width: f64) -> Measurement {
        self.composer(metrics, max_width).measure(&self.tokens)
    }

    /// Draw every glyph into `sink` and return the number of lines.
    pub fn render(
        &self,
        metrics: impl FontMetrics,
        max_width: f64,
        sink: &mut dyn GlyphSink,
    ) -> usize {
        self.composer(metrics, max_width).render(&self.tokens, sink)
    }

    /// Smallest width that lays out every token on one line.
    ///
    /// Uses the same quantities the composer tests for overflow: the
    /// unkerned pen position (summed per code point) plus the width of the
    /// next token. Kerning only moves the pen left, so it never wraps.
    pub fn natural_width(&self, metrics: impl FontMetrics) -> f64 {
        let mut pen = 0.0;
        let mut width: f64 = 0.0;
        let mut buf = [0u8; 4];
        for token in &self.tokens {
            width = width.max(pen + metrics.advance_width(token.as_str()));
            pen += token
                .as_str()
                .chars()
                .map(|c| metrics.advance_width(c.encode_utf8(&mut buf)))
                .sum::<f64>();
        }
        width
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::composer::PositionedGlyph;
    use crate::metrics::FixedMetrics;

    fn metrics() -> FixedMetrics {
        FixedMetrics::new(10.0, 14.0)
    }

    #[test]
    fn test_tokens_follow_text() {
        let mut model = KernedText::new("「こんにちは。」");
        assert_eq!(model.tokens().len(), 6);

        assert!(model.set_text("Hello、World"));
        let tokens: Vec<&str> = model.tokens().iter().map(Token::as_str).collect();
        assert_eq!(tokens, ["Hello", "、", "World"]);

        assert!(!model.set_text("Hello、World"));
        assert!(model.set_text(""));
        assert!(model.tokens().is_empty());
    }

    #[test]
    fn test_empty_text_measures_zero() {
        let model = KernedText::new("");
        let m = model.measure(metrics(), 100.0);
        assert_eq!(m.line_count, 0);
        assert_eq!(m.height, 0.0);
    }

    #[test]
    fn test_measure_uses_style_and_limits() {
        let model = KernedText::new("あいうえお")
            .with_style(TextStyle::default().with_font_size(20.0))
            .with_max_lines(Some(2));
        let m = model.measure(metrics(), 20.0);
        assert_eq!(m.line_count, 2);
        assert!(m.truncated);
        assert_eq!(m.height, 14.0 * 2.0 + 1.0);

        let mut glyphs: Vec<PositionedGlyph> = Vec::new();
        assert_eq!(model.render(metrics(), 20.0, &mut glyphs), 2);
        assert_eq!(glyphs.len(), 4);
        assert_eq!(glyphs[0].y, 20.0);
        assert_eq!(glyphs[2].y, 20.0 + 14.0 + 1.0);
    }

    #[test]
    fn test_width_change_reflows() {
        let model = KernedText::new("あいうえお");
        assert_eq!(model.measure(metrics(), 100.0).line_count, 1);
        assert_eq!(model.measure(metrics(), 30.0).line_count, 2);
        assert_eq!(model.measure(metrics(), 10.0).line_count, 5);
    }

    #[test]
    fn test_kerning_setting() {
        let mut model = KernedText::new("（A）");
        let mut glyphs: Vec<PositionedGlyph> = Vec::new();
        model.render(metrics(), 100.0, &mut glyphs);
        assert_eq!(glyphs[2].x, 15.0);

        model.set_kerning(KerningMode::FirstGlyphOnly);
        assert_eq!(model.kerning(), KerningMode::FirstGlyphOnly);
        let mut glyphs: Vec<PositionedGlyph> = Vec::new();
        model.render(metrics(), 100.0, &mut glyphs);
        assert_eq!(glyphs[0].x, -5.0);
        assert_eq!(glyphs[2].x, 15.0);
    }

    #[test]
    fn test_from_config() {
        let config = YakumonoConfig::from_toml(
            "text = \"『『a』』\"\nmax_lines = 1\nkerning_first_only = true\ntext_size = 14.0",
        )
        .unwrap();
        let model = KernedText::from_config(&config).unwrap();
        assert_eq!(model.text(), "『『a』』");
        assert_eq!(model.max_lines(), Some(1));
        assert_eq!(model.kerning(), KerningMode::FirstGlyphOnly);
        assert_eq!(model.style().font_size, 14.0);
        assert_eq!(model.tokens().len(), 3);
    }

    #[test]
    fn test_natural_width() {
        let model = KernedText::new("Hello、World");
        assert_eq!(model.natural_width(metrics()), 110.0);
        assert_eq!(KernedText::new("").natural_width(metrics()), 0.0);
    }

    /// Shapes runs tighter than their parts, like a proportional font
    /// with pair kerning: each adjacent pair of code points loses 3px.
    struct ShapedMetrics;

    impl FontMetrics for ShapedMetrics {
        fn advance_width(&self, text: &str) -> f64 {
            let count = text.chars().count() as f64;
            if count == 0.0 { 0.0 } else { count * 10.0 - (count - 1.0) * 3.0 }
        }

        fn line_height(&self) -> f64 {
            14.0
        }
    }

    #[test]
    fn test_natural_width_never_wraps() {
        let model = KernedText::new("Hello Hello");
        // The pen reaches 60 before the second word, which is 38 wide
        let width = model.natural_width(ShapedMetrics);
        assert_eq!(width, 98.0);
        assert!(width > ShapedMetrics.advance_width(model.text()));

        let m = model.measure(ShapedMetrics, width);
        assert_eq!(m.line_count, 1);
        assert!(!m.truncated);
        assert_eq!(model.measure(ShapedMetrics, width - 1.0).line_count, 2);
    }
}
