// Copyright 2025 the Yakumono Authors
// SPDX-License-Identifier: Apache-2.0

//! KernedTextWidget - Masonry widget that lays out and paints text with
//! Japanese bracket kerning, with Xilem View wrapper
//!
//! The widget is a thin adapter around [`KernedText`]: layout measures the
//! model against the width offered by the parent, and paint runs the same
//! composition pass with a sink that draws each glyph through Parley.

use std::marker::PhantomData;

use kurbo::{Affine, Size};
use masonry::accesskit::{Node, Role};
use masonry::core::{
    AccessCtx, BoxConstraints, ChildrenIds, LayoutCtx, NoAction, PaintCtx, PropertiesMut,
    PropertiesRef, RegisterCtx, Update, UpdateCtx, Widget, render_text,
};
use masonry::vello::Scene;
use masonry::vello::peniko::Brush;
use xilem::core::{MessageContext, MessageResult, Mut, View, ViewMarker};
use xilem::{Pod, ViewCtx};

use crate::composer::{GlyphSink, KerningMode};
use crate::metrics::{CachedMetrics, ParleyMetrics, with_layout};
use crate::model::KernedText;
use crate::text_style::TextStyle;

// ============================================================
// KernedTextWidget (custom Masonry widget)
// ============================================================

/// A leaf widget that draws one kerned, wrapped text block
pub struct KernedTextWidget {
    model: KernedText,
    /// Oracles for the current style, rebuilt when the style changes
    metrics: CachedMetrics<ParleyMetrics>,
    /// Width used by the last layout pass, reused by paint
    layout_width: f64,
}

impl KernedTextWidget {
    pub fn new(model: KernedText) -> Self {
        let metrics = CachedMetrics::new(ParleyMetrics::new(model.style().clone()));
        Self {
            model,
            metrics,
            layout_width: 0.0,
        }
    }

    /// Update the text (for use in View::rebuild)
    pub fn set_text(&mut self, text: &str) -> bool {
        self.model.set_text(text)
    }

    /// Update the style and re-measure the font (for use in View::rebuild)
    pub fn set_style(&mut self, style: TextStyle) {
        self.metrics = CachedMetrics::new(ParleyMetrics::new(style.clone()));
        self.model.set_style(style);
    }

    /// Update the line limit (for use in View::rebuild)
    pub fn set_max_lines(&mut self, max_lines: Option<usize>) {
        self.model.set_max_lines(max_lines);
    }

    /// Update the kerning mode (for use in View::rebuild)
    pub fn set_kerning(&mut self, kerning: KerningMode) {
        self.model.set_kerning(kerning);
    }
}

/// Draws glyphs into a Vello scene at their composed baseline origins.
struct ScenePainter<'a> {
    scene: &'a mut Scene,
    style: &'a TextStyle,
    brushes: &'a [Brush],
}

impl GlyphSink for ScenePainter<'_> {
    fn glyph(&mut self, x: f64, y: f64, glyph: &str) {
        let scene = &mut *self.scene;
        let brushes = self.brushes;
        with_layout(self.style, glyph, |layout| {
            // Parley places the layout by its top edge; shift so the
            // first line's baseline lands on `y`.
            let baseline = layout
                .lines()
                .next()
                .map(|line| line.metrics().baseline as f64)
                .unwrap_or(0.0);
            render_text(
                scene,
                Affine::translate((x, y - baseline)),
                layout,
                brushes,
                false,
            );
        });
    }
}

impl Widget for KernedTextWidget {
    type Action = NoAction;

    fn register_children(&mut self, _ctx: &mut RegisterCtx<'_>) {
        // Leaf widget - no children
    }

    fn update(
        &mut self,
        _ctx: &mut UpdateCtx<'_>,
        _props: &mut PropertiesMut<'_>,
        _event: &Update,
    ) {
    }

    fn layout(
        &mut self,
        _ctx: &mut LayoutCtx<'_>,
        _props: &mut PropertiesMut<'_>,
        bc: &BoxConstraints,
    ) -> Size {
        let available = bc.max().width;
        let width = if available.is_finite() {
            available
        } else {
            self.model.natural_width(&self.metrics)
        };
        self.layout_width = width;

        let measurement = self.model.measure(&self.metrics, width);
        if measurement.truncated {
            tracing::debug!(
                "Text truncated to {} lines at width {:.1}",
                measurement.line_count,
                width
            );
        }
        bc.constrain(Size::new(width, measurement.height))
    }

    fn paint(&mut self, _ctx: &mut PaintCtx<'_>, _props: &PropertiesRef<'_>, scene: &mut Scene) {
        if self.model.tokens().is_empty() {
            return;
        }

        let brushes = vec![Brush::Solid(self.model.style().color)];
        let mut painter = ScenePainter {
            scene,
            style: self.model.style(),
            brushes: &brushes,
        };
        self.model
            .render(&self.metrics, self.layout_width, &mut painter);
    }

    fn accessibility_role(&self) -> Role {
        Role::Label
    }

    fn accessibility(
        &mut self,
        _ctx: &mut AccessCtx<'_>,
        _props: &PropertiesRef<'_>,
        node: &mut Node,
    ) {
        node.set_value(self.model.text());
    }

    fn children_ids(&self) -> ChildrenIds {
        ChildrenIds::new()
    }
}

// ===== Xilem View Wrapper =====

/// Create a kerned text view
pub fn kerned_text<State, Action>(text: impl Into<String>) -> KernedTextView<State, Action> {
    KernedTextView {
        text: text.into(),
        style: TextStyle::default(),
        max_lines: None,
        kerning: KerningMode::default(),
        phantom: PhantomData,
    }
}

/// The Xilem View for KernedTextWidget
#[must_use = "View values do nothing unless provided to Xilem."]
pub struct KernedTextView<State, Action = ()> {
    text: String,
    style: TextStyle,
    max_lines: Option<usize>,
    kerning: KerningMode,
    phantom: PhantomData<fn() -> (State, Action)>,
}

// Builder methods for configuring the text view
impl<State, Action> KernedTextView<State, Action> {
    pub fn style(mut self, style: TextStyle) -> Self {
        self.style = style;
        self
    }

    pub fn max_lines(mut self, max_lines: Option<usize>) -> Self {
        self.max_lines = max_lines;
        self
    }

    pub fn kerning(mut self, kerning: KerningMode) -> Self {
        self.kerning = kerning;
        self
    }

    fn model(&self) -> KernedText {
        KernedText::new(self.text.clone())
            .with_style(self.style.clone())
            .with_max_lines(self.max_lines)
            .with_kerning(self.kerning)
    }
}

impl<State, Action> ViewMarker for KernedTextView<State, Action> {}

impl<State: 'static, Action: 'static> View<State, Action, ViewCtx>
    for KernedTextView<State, Action>
{
    type Element = Pod<KernedTextWidget>;
    type ViewState = ();

    fn build(&self, ctx: &mut ViewCtx, _app_state: &mut State) -> (Self::Element, Self::ViewState) {
        (ctx.create_pod(KernedTextWidget::new(self.model())), ())
    }

    fn rebuild(
        &self,
        prev: &Self,
        _view_state: &mut Self::ViewState,
        _ctx: &mut ViewCtx,
        mut element: Mut<'_, Self::Element>,
        _app_state: &mut State,
    ) {
        let mut widget = element.downcast::<KernedTextWidget>();

        if self.text != prev.text && widget.widget.set_text(&self.text) {
            widget.ctx.request_layout();
        }

        if self.style != prev.style {
            widget.widget.set_style(self.style.clone());
            widget.ctx.request_layout();
        }

        if self.max_lines != prev.max_lines {
            widget.widget.set_max_lines(self.max_lines);
            widget.ctx.request_layout();
        }

        if self.kerning != prev.kerning {
            // Kerning shifts the pen, which can move wrap points.
            widget.widget.set_kerning(self.kerning);
            widget.ctx.request_layout();
        }
    }

    fn teardown(
        &self,
        _view_state: &mut Self::ViewState,
        _ctx: &mut ViewCtx,
        _element: Mut<'_, Self::Element>,
    ) {
    }

    fn message(
        &self,
        _view_state: &mut Self::ViewState,
        _message: &mut MessageContext,
        _element: Mut<'_, Self::Element>,
        _app_state: &mut State,
    ) -> MessageResult<Action> {
        MessageResult::Stale
    }
}
