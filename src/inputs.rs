//! Numeric bound inputs, step and reset buttons, and the copy button.
//!
//! Edits are sent to the slider through its [`RangeControl`]; none of these
//! widgets clamp or commit on their own.

use floem::event::EventPropagation;
use floem::prelude::*;
use floem::reactive::{RwSignal, SignalGet, SignalUpdate, create_effect};
use floem::views::Container;
use lucide_icons::Icon;

use crate::constants;
use crate::domain::{Handle, RangeValues};
use crate::range_slider::RangeControl;

/// Parses a typed amount, tolerating a currency prefix and digit grouping.
pub(crate) fn parse_amount(raw: &str) -> Option<f64> {
    let cleaned: String = raw
        .trim()
        .trim_start_matches(constants::CURRENCY_SYMBOL)
        .chars()
        .filter(|c| *c != ',' && *c != '_' && !c.is_whitespace())
        .collect();
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn format_plain(value: f64) -> String {
    format!("{}", value)
}

/// The value to send for the text in a bound's field, if any.
///
/// Unparseable text and text that still reads as the current value are not
/// edits, so leaving an untouched field commits nothing.
pub(crate) fn typed_edit(raw: &str, current: f64) -> Option<f64> {
    parse_amount(raw).filter(|value| *value != current)
}

/// A text field bound to one end of the selection.
///
/// Typed values are sent on Enter or focus-lost. The field then shows the
/// current value until the slider reports the settled one.
pub(crate) fn amount_input(
    lbl: &'static str,
    values: RwSignal<RangeValues>,
    handle: Handle,
    control: RangeControl,
) -> impl IntoView {
    let text = RwSignal::new(format_plain(values.get_untracked().get(handle)));

    // Signal → text
    create_effect(move |_| {
        let expected = format_plain(values.get().get(handle));
        if text.get_untracked() != expected {
            text.set(expected);
        }
    });

    let commit = move || {
        let raw = text.get_untracked();
        let current = values.get_untracked().get(handle);
        if let Some(value) = typed_edit(&raw, current) {
            control.set_value(handle, value);
        }
        let formatted = format_plain(current);
        if raw != formatted {
            text.set(formatted);
        }
    };
    let commit_on_enter = commit.clone();

    v_stack((
        text_input(text)
            .style(|s| {
                s.width(constants::INPUT_WIDTH)
                    .padding(2.0)
                    .font_size(constants::INPUT_FONT)
                    .font_family("monospace".to_string())
                    .background(Color::WHITE)
                    .border(1.0)
                    .border_color(Color::rgb8(200, 200, 200))
                    .border_radius(3.0)
            })
            .on_event_stop(floem::event::EventListener::FocusLost, move |_| {
                commit();
            })
            .on_event(floem::event::EventListener::KeyDown, move |e| {
                if let floem::event::Event::KeyDown(ke) = e
                    && ke.key.logical_key
                        == floem::keyboard::Key::Named(floem::keyboard::NamedKey::Enter)
                {
                    commit_on_enter();
                    return EventPropagation::Stop;
                }
                EventPropagation::Continue
            }),
        label(move || lbl).style(|s| {
            s.font_size(constants::LABEL_FONT)
                .color(Color::rgb8(120, 120, 120))
                .justify_content(Some(floem::taffy::AlignContent::Center))
        }),
    ))
    .style(|s| s.items_center().gap(1.0))
}

/// A small icon button that moves one bound by `steps` grid steps.
pub(crate) fn step_button(
    icon: Icon,
    handle: Handle,
    steps: i32,
    control: RangeControl,
) -> impl IntoView {
    let pressed = RwSignal::new(false);
    icon_button(icon, pressed).on_event_stop(
        floem::event::EventListener::PointerUp,
        move |_| {
            pressed.set(false);
            control.nudge(handle, steps);
        },
    )
}

/// Restores the slider's initial selection.
pub(crate) fn reset_button(control: RangeControl) -> impl IntoView {
    let pressed = RwSignal::new(false);
    icon_button(Icon::RotateCcw, pressed).on_event_stop(
        floem::event::EventListener::PointerUp,
        move |_| {
            pressed.set(false);
            control.reset();
        },
    )
}

/// A small copy button that copies the result of `get_text` to the clipboard.
pub(crate) fn copy_button(get_text: impl Fn() -> String + 'static) -> impl IntoView {
    let pressed = RwSignal::new(false);
    icon_button(Icon::Copy, pressed).on_event_stop(
        floem::event::EventListener::PointerUp,
        move |_| {
            pressed.set(false);
            copy_to_clipboard(&get_text());
        },
    )
}

fn icon_button(icon: Icon, pressed: RwSignal<bool>) -> Container {
    container(
        label(move || icon.unicode().to_string()).style(move |s| {
            let c = if pressed.get() {
                Color::rgb8(80, 80, 80)
            } else {
                Color::rgb8(120, 120, 120)
            };
            s.font_size(14.0).font_family("lucide".to_string()).color(c)
        }),
    )
    .style(|s| {
        s.size(20.0, 20.0)
            .items_center()
            .justify_center()
            .border_radius(3.0)
            .cursor(floem::style::CursorStyle::Pointer)
            .align_self(Some(floem::taffy::AlignItems::Start))
            .hover(|s| s.background(Color::rgb8(230, 230, 230)))
    })
    .on_event_stop(floem::event::EventListener::PointerDown, move |_| {
        pressed.set(true);
    })
}

fn copy_to_clipboard(text: &str) {
    match arboard::Clipboard::new() {
        Ok(mut clipboard) => {
            if let Err(e) = clipboard.set_text(text) {
                tracing::warn!(error = %e, "failed to copy range to clipboard");
            }
        }
        Err(e) => tracing::warn!(error = %e, "clipboard unavailable"),
    }
}
