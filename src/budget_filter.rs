//! Budget filter panel: value readouts, the range slider, and per-bound
//! inputs with step buttons.

use floem::prelude::*;
use floem::reactive::{RwSignal, SignalGet};
#[cfg(feature = "inputs")]
use lucide_icons::Icon;

use crate::config::RangeConfig;
use crate::constants;
use crate::domain::RangeValues;
#[cfg(feature = "inputs")]
use crate::domain::Handle;
use crate::error::Result;
#[cfg(feature = "inputs")]
use crate::inputs::{amount_input, copy_button, reset_button, step_button};
use crate::range_slider::range_slider;

/// Formats an amount as whole currency units with digit grouping, e.g. `$25,000`.
pub fn format_amount(value: f64) -> String {
    let whole = value.round() as i64;
    let digits = whole.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let sign = if whole < 0 { "-" } else { "" };
    format!("{sign}{}{grouped}", constants::CURRENCY_SYMBOL)
}

/// `$400 - $25,000`
pub fn format_range(values: RangeValues) -> String {
    format!("{} - {}", format_amount(values.low), format_amount(values.high))
}

/// Creates the budget filter panel.
///
/// `values` tracks the selection live while dragging or typing; `on_commit`
/// receives the settled pair once per finished gesture or edit, which is
/// where a host screen re-runs its listing query. Every edit goes through
/// the slider, so there is one commit path.
pub(crate) fn budget_filter_view(
    values: RwSignal<RangeValues>,
    config: RangeConfig,
    on_commit: impl Fn(RangeValues) + 'static,
) -> Result<impl IntoView> {
    let slider = range_slider(values, &config)?.on_commit(on_commit);
    #[cfg(feature = "inputs")]
    let control = slider.control();

    Ok(v_stack((
        // Low / high readouts
        h_stack((
            label(move || format_amount(values.get().low)),
            empty().style(|s| s.flex_grow(1.0)),
            label(move || format_amount(values.get().high)),
        ))
        .style(|s| {
            s.font_size(constants::VALUE_FONT)
                .color(Color::rgb8(40, 40, 40))
                .margin_horiz(8.0)
        }),
        slider.style(|s| s.margin_horiz(8.0)),
        // Min / max inputs with steppers (feature-gated)
        #[cfg(feature = "inputs")]
        h_stack((
            step_button(Icon::Minus, Handle::Low, -1, control),
            amount_input("Min", values, Handle::Low, control),
            step_button(Icon::Plus, Handle::Low, 1, control),
            empty().style(|s| s.flex_grow(1.0)),
            step_button(Icon::Minus, Handle::High, -1, control),
            amount_input("Max", values, Handle::High, control),
            step_button(Icon::Plus, Handle::High, 1, control),
            reset_button(control),
            copy_button(move || format_range(values.get())),
        ))
        .style(|st| st.gap(constants::GAP / 2.0).items_center().margin_horiz(8.0)),
    ))
    .style(|st| {
        st.gap(constants::GAP)
            .padding_horiz(constants::PADDING)
            .padding_bottom(constants::PADDING)
            .padding_top(constants::PADDING)
            .size_full()
            .justify_center()
            .border_radius(constants::RADIUS)
            .background(Color::rgb8(242, 242, 242))
    }))
}
