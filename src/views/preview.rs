// Copyright 2025 the Yakumono Authors
// SPDX-License-Identifier: Apache-2.0

//! Preview view - the configured text laid out in a padded panel

use masonry::properties::types::AsUnit;
use xilem::WidgetView;
use xilem::style::Style;
use xilem::view::{CrossAxisAlignment, FlexExt, flex_col, label, sized_box};

use crate::components::kerned_text;
use crate::data::AppState;
use crate::settings;
use crate::theme;

/// Gap between the error banner and the text panel
const BANNER_GAP: f64 = 8.0;

/// The text panel, with a config error banner above it if loading failed
pub fn preview(state: &mut AppState) -> impl WidgetView<AppState> + use<> {
    let banner = state
        .error_message
        .as_ref()
        .map(|message| label(message.clone()).text_size(13.0).color(theme::text::ERROR));

    let text = kerned_text(state.text.clone())
        .style(state.style.clone())
        .max_lines(state.max_lines)
        .kerning(state.kerning);

    sized_box(
        flex_col((
            banner,
            sized_box(text)
                .expand_width()
                .padding(settings::preview::PADDING)
                .background_color(theme::preview::BACKGROUND)
                .border_color(theme::preview::OUTLINE)
                .border_width(1.0)
                .flex(1.0),
        ))
        .gap(BANNER_GAP.px())
        .cross_axis_alignment(CrossAxisAlignment::Fill),
    )
    .expand_height()
    .padding(settings::preview::PADDING)
}
