// Copyright 2025 the Yakumono Authors
// SPDX-License-Identifier: Apache-2.0

//! Font measurement oracles for the line composer.
//!
//! The composer never talks to a font directly. It asks a [`FontMetrics`]
//! implementation for two things: the advance width of a string and the
//! line height of the font. This keeps the layout engine independent of
//! any rendering backend.
//!
//! - [`ParleyMetrics`] measures with Parley, the same text stack the
//!   widget paints with.
//! - [`FixedMetrics`] is a monospaced stand-in with deterministic results,
//!   used in tests and anywhere a real font is not available.
//! - [`CachedMetrics`] memoizes widths of another oracle, so repeated
//!   passes over the same text do not lay it out again.

use std::cell::RefCell;
use std::collections::HashMap;

use masonry::core::{BrushIndex, StyleProperty};
use parley::{FontContext, FontFamily, FontStack, GenericFamily, Layout, LayoutContext};

use crate::settings;
use crate::text_style::TextStyle;

/// Measurement oracle for one font at one size and style.
///
/// Implementations should:
/// - Return widths in the same pixel units as the layout width budget
/// - Return the width of the string as laid out on a single line
/// - Be cheap for repeated lookups; the composer asks for every token
///   and every code point on each pass
pub trait FontMetrics {
    /// Advance width of `text` on one line.
    fn advance_width(&self, text: &str) -> f64;

    /// Line height (ascent + descent + leading) of the font.
    fn line_height(&self) -> f64;
}

impl<T: FontMetrics + ?Sized> FontMetrics for &T {
    fn advance_width(&self, text: &str) -> f64 {
        (**self).advance_width(text)
    }

    fn line_height(&self) -> f64 {
        (**self).line_height()
    }
}

// ============================================================
// FixedMetrics
// ============================================================

/// Every code point has the same advance, unless overridden.
#[derive(Clone, Debug, PartialEq)]
pub struct FixedMetrics {
    glyph_width: f64,
    line_height: f64,
    overrides: HashMap<char, f64>,
}

impl FixedMetrics {
    pub fn new(glyph_width: f64, line_height: f64) -> Self {
        Self {
            glyph_width,
            line_height,
            overrides: HashMap::new(),
        }
    }

    /// Give one code point its own advance width.
    pub fn with_glyph_width(mut self, c: char, width: f64) -> Self {
        self.overrides.insert(c, width);
        self
    }
}

impl FontMetrics for FixedMetrics {
    fn advance_width(&self, text: &str) -> f64 {
        text.chars()
            .map(|c| self.overrides.get(&c).copied().unwrap_or(self.glyph_width))
            .sum()
    }

    fn line_height(&self) -> f64 {
        self.line_height
    }
}

// ============================================================
// CachedMetrics
// ============================================================

/// Width cache in front of another oracle.
///
/// Keyed by the measured string. The cache is cleared once it holds
/// `settings::metrics::WIDTH_CACHE_CAPACITY` entries.
#[derive(Debug)]
pub struct CachedMetrics<M> {
    inner: M,
    widths: RefCell<HashMap<String, f64>>,
}

impl<M: FontMetrics> CachedMetrics<M> {
    pub fn new(inner: M) -> Self {
        Self {
            inner,
            widths: RefCell::new(HashMap::new()),
        }
    }
}

impl<M: FontMetrics> FontMetrics for CachedMetrics<M> {
    fn advance_width(&self, text: &str) -> f64 {
        let cached = self.widths.borrow().get(text).copied();
        if let Some(width) = cached {
            return width;
        }

        let width = self.inner.advance_width(text);
        let mut widths = self.widths.borrow_mut();
        if widths.len() >= settings::metrics::WIDTH_CACHE_CAPACITY {
            tracing::debug!("Width cache full at {} entries, clearing", widths.len());
            widths.clear();
        }
        widths.insert(text.to_string(), width);
        width
    }

    fn line_height(&self) -> f64 {
        self.inner.line_height()
    }
}

// ============================================================
// ParleyMetrics
// ============================================================

thread_local! {
    static FONT_CX: RefCell<FontContext> = RefCell::new(FontContext::default());
    static LAYOUT_CX: RefCell<LayoutContext<BrushIndex>> = RefCell::new(LayoutContext::new());
}

/// Lay out `text` on a single line in `style` and hand the layout to `f`.
///
/// Font and layout contexts are thread-local and reused between calls.
pub(crate) fn with_layout<R>(
    style: &TextStyle,
    text: &str,
    f: impl FnOnce(&Layout<BrushIndex>) -> R,
) -> R {
    FONT_CX.with(|font_cell| {
        LAYOUT_CX.with(|layout_cell| {
            let mut font_cx = font_cell.borrow_mut();
            let mut layout_cx = layout_cell.borrow_mut();

            let mut builder = layout_cx.ranged_builder(&mut font_cx, text, 1.0, false);
            builder.push_default(StyleProperty::FontSize(style.font_size as f32));
            let family = match &style.font_family {
                Some(name) => FontFamily::Named(name.clone().into()),
                None => FontFamily::Generic(GenericFamily::SansSerif),
            };
            builder.push_default(StyleProperty::FontStack(FontStack::Single(family)));
            if style.font_style.is_bold() {
                builder.push_default(StyleProperty::FontWeight(parley::FontWeight::BOLD));
            }
            if style.font_style.is_italic() {
                builder.push_default(StyleProperty::FontStyle(parley::FontStyle::Italic));
            }
            builder.push_default(StyleProperty::Brush(BrushIndex(0)));

            let mut layout = builder.build(text);
            layout.break_all_lines(None);
            f(&layout)
        })
    })
}

/// Font metrics measured with Parley.
#[derive(Clone, Debug)]
pub struct ParleyMetrics {
    style: TextStyle,
    line_height: f64,
}

impl ParleyMetrics {
    /// Measure the line height of `style` once, from the reference glyph.
    pub fn new(style: TextStyle) -> Self {
        let line_height = with_layout(&style, settings::line::REFERENCE_GLYPH, |layout| {
            layout.height() as f64
        });
        tracing::debug!(
            "Line height {:.2}px for {:?} {} at {:.1}px",
            line_height,
            style.font_family,
            style.font_style.name(),
            style.font_size
        );
        Self { style, line_height }
    }
}

impl FontMetrics for ParleyMetrics {
    fn advance_width(&self, text: &str) -> f64 {
        if text.is_empty() {
            return 0.0;
        }
        with_layout(&self.style, text, |layout| layout.full_width() as f64)
    }

    fn line_height(&self) -> f64 {
        self.line_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_width_counts_code_points() {
        let metrics = FixedMetrics::new(10.0, 14.0);
        assert_eq!(metrics.advance_width(""), 0.0);
        assert_eq!(metrics.advance_width("a"), 10.0);
        assert_eq!(metrics.advance_width("こんにちは"), 50.0);
        // One astral code point, one advance
        assert_eq!(metrics.advance_width("𠮷"), 10.0);
        assert_eq!(metrics.line_height(), 14.0);
    }

    #[test]
    fn test_fixed_width_overrides() {
        let metrics = FixedMetrics::new(10.0, 14.0).with_glyph_width('i', 4.0);
        assert_eq!(metrics.advance_width("ii"), 8.0);
        assert_eq!(metrics.advance_width("hi"), 14.0);
    }

    /// Counts how often the wrapped oracle is asked for a width.
    struct CountingMetrics {
        inner: FixedMetrics,
        calls: std::cell::Cell<usize>,
    }

    impl FontMetrics for CountingMetrics {
        fn advance_width(&self, text: &str) -> f64 {
            self.calls.set(self.calls.get() + 1);
            self.inner.advance_width(text)
        }

        fn line_height(&self) -> f64 {
            self.inner.line_height()
        }
    }

    fn counting() -> CountingMetrics {
        CountingMetrics {
            inner: FixedMetrics::new(10.0, 14.0),
            calls: std::cell::Cell::new(0),
        }
    }

    #[test]
    fn test_cached_widths() {
        let cached = CachedMetrics::new(counting());
        assert_eq!(cached.advance_width("あい"), 20.0);
        assert_eq!(cached.advance_width("あい"), 20.0);
        assert_eq!(cached.advance_width("あ"), 10.0);
        assert_eq!(cached.inner.calls.get(), 2);
        assert_eq!(cached.line_height(), 14.0);
    }

    #[test]
    fn test_cache_clears_when_full() {
        let cached = CachedMetrics::new(counting());
        for i in 0..settings::metrics::WIDTH_CACHE_CAPACITY {
            cached.advance_width(&i.to_string());
        }
        assert_eq!(
            cached.widths.borrow().len(),
            settings::metrics::WIDTH_CACHE_CAPACITY
        );

        cached.advance_width("overflow");
        assert_eq!(cached.widths.borrow().len(), 1);
        assert_eq!(cached.advance_width("overflow"), 80.0);
    }

    #[test]
    fn test_reference_forwarding() {
        fn measure_pair<M: FontMetrics>(metrics: M) -> (f64, f64) {
            (metrics.advance_width("ab"), metrics.line_height())
        }

        let metrics = FixedMetrics::new(8.0, 12.0);
        assert_eq!(measure_pair(&metrics), (16.0, 12.0));
        let by_ref: &dyn FontMetrics = &metrics;
        assert_eq!(measure_pair(by_ref), (16.0, 12.0));
    }
}
