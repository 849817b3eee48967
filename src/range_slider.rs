//! Dual-thumb range slider view.
//!
//! Hosts a [`RangeSelector`] and forwards Floem pointer events to it. A
//! press grabs whichever thumb is nearest; the drag is then anchored at that
//! thumb, so it never jumps to the pointer.

use floem::kurbo::{Circle, Rect};
use floem::peniko::Color;

use floem::reactive::{RwSignal, SignalGet, SignalUpdate, create_effect};
use floem::views::Decorators;
use floem::{
    View, ViewId,
    context::{ComputeLayoutCx, EventCx, PaintCx, UpdateCx},
    event::{Event, EventPropagation},
};
use floem_renderer::Renderer;

use crate::config::RangeConfig;
use crate::constants;
use crate::domain::{Handle, RangeValues};
use crate::error::Result;
use crate::selector::{RangeSelector, SelectorCommand};

const TRACK_COLOR: Color = Color::rgb8(220, 220, 220);
const FILL_COLOR: Color = Color::rgb8(59, 130, 246);

enum RangeUpdate {
    Values(RangeValues),
    Command(SelectorCommand),
}

/// Sends programmatic edits to a mounted [`RangeSlider`].
///
/// Edits are clamped exactly like a drag and commit through the slider's
/// `on_commit`, so typed values and step buttons settle the same way a
/// released thumb does.
#[derive(Debug, Clone, Copy)]
pub struct RangeControl {
    id: ViewId,
}

impl RangeControl {
    pub fn set_value(&self, handle: Handle, value: f64) {
        self.send(SelectorCommand::Set(handle, value));
    }

    pub fn nudge(&self, handle: Handle, steps: i32) {
        self.send(SelectorCommand::Nudge(handle, steps));
    }

    pub fn reset(&self) {
        self.send(SelectorCommand::Reset);
    }

    fn send(&self, command: SelectorCommand) {
        self.id.update_state(RangeUpdate::Command(command));
    }
}

pub struct RangeSlider {
    id: ViewId,
    selector: RangeSelector,
    /// Thumb held by the current pointer, if any.
    held: Option<Handle>,
    values: RwSignal<RangeValues>,
    size: floem::taffy::prelude::Size<f32>,
}

/// Creates a horizontal two-thumb range slider.
///
/// - `values`: the `(low, high)` selection. Drags write every accepted
///   update into it; external writes are clamped into the domain and
///   written back if they had to move.
/// - `config`: domain, step, minimum gap, initial values and thumb size.
///   The signal is overwritten with the clamped initial values.
pub fn range_slider(values: RwSignal<RangeValues>, config: &RangeConfig) -> Result<RangeSlider> {
    let id = ViewId::new();

    let selector = RangeSelector::new(config)?.on_change(move |v| values.set(v));
    if values.get_untracked() != selector.values() {
        values.set(selector.values());
    }

    create_effect(move |_| {
        let v = values.get();
        id.update_state(RangeUpdate::Values(v));
    });

    Ok(RangeSlider {
        id,
        selector,
        held: None,
        values,
        size: Default::default(),
    }
    .style(|s| {
        s.height(constants::SLIDER_HEIGHT)
            .min_width(constants::THUMB_SIZE as f32 * 3.0)
            .cursor(floem::style::CursorStyle::Pointer)
    }))
}

impl RangeSlider {
    /// Called once per finished gesture or [`RangeControl`] edit with the
    /// settled values.
    pub fn on_commit(mut self, f: impl Fn(RangeValues) + 'static) -> Self {
        self.selector.set_on_commit(f);
        self
    }

    pub fn control(&self) -> RangeControl {
        RangeControl { id: self.id }
    }

    fn release(&mut self, cancelled: bool) {
        if let Some(handle) = self.held.take() {
            if cancelled {
                self.selector.on_pointer_cancel(handle);
            } else {
                self.selector.on_pointer_up(handle);
            }
        }
    }

    fn paint_thumb(&self, cx: &mut PaintCx, handle: Handle, cy: f64) {
        let radius = self.selector.thumb_size() / 2.0;
        let centre = (self.selector.thumb_offset(handle) + radius, cy);
        let circle = Circle::new(centre, radius - 1.0);
        cx.fill(&circle, Color::WHITE, 0.0);
        let ring = if self.held == Some(handle) {
            FILL_COLOR
        } else {
            Color::rgba8(0, 0, 0, 80)
        };
        cx.stroke(&circle, ring, &floem::kurbo::Stroke::new(1.5));
    }
}

impl View for RangeSlider {
    fn id(&self) -> ViewId {
        self.id
    }

    fn update(&mut self, _cx: &mut UpdateCx, state: Box<dyn std::any::Any>) {
        if let Ok(update) = state.downcast::<RangeUpdate>() {
            match *update {
                RangeUpdate::Values(v) => {
                    let settled = self.selector.sync_values(v);
                    if settled != v {
                        self.values.set(settled);
                    }
                }
                RangeUpdate::Command(command) => self.selector.execute(command),
            }
            self.id.request_layout();
        }
    }

    fn event_before_children(&mut self, cx: &mut EventCx, event: &Event) -> EventPropagation {
        match event {
            Event::PointerDown(e) => {
                let handle = self.selector.handle_at(e.pos.x);
                if self.selector.on_pointer_down(handle, e.pos.x) {
                    cx.update_active(self.id());
                    self.held = Some(handle);
                    self.id.request_layout();
                }
                EventPropagation::Stop
            }
            Event::PointerMove(e) => {
                if let Some(handle) = self.held {
                    self.selector.on_pointer_move_to(handle, e.pos.x);
                    self.id.request_layout();
                    EventPropagation::Stop
                } else {
                    EventPropagation::Continue
                }
            }
            Event::PointerUp(_) => {
                self.release(false);
                self.id.request_layout();
                EventPropagation::Continue
            }
            Event::FocusLost => {
                self.release(true);
                EventPropagation::Continue
            }
            _ => EventPropagation::Continue,
        }
    }

    fn compute_layout(&mut self, _cx: &mut ComputeLayoutCx) -> Option<Rect> {
        let layout = self.id.get_layout().unwrap_or_default();
        self.size = layout.size;
        self.selector.report_track_width(self.size.width as f64);
        None
    }

    fn paint(&mut self, cx: &mut PaintCx) {
        let w = self.size.width as f64;
        let h = self.size.height as f64;
        if w == 0.0 || h == 0.0 {
            return;
        }
        let radius = self.selector.thumb_size() / 2.0;
        let cy = h / 2.0;
        let half_track = constants::TRACK_HEIGHT / 2.0;

        // Track runs between the two extreme thumb centres
        let track = Rect::new(radius, cy - half_track, (w - radius).max(radius), cy + half_track)
            .to_rounded_rect(half_track);
        cx.fill(&track, TRACK_COLOR, 0.0);

        let low_x = self.selector.thumb_offset(Handle::Low) + radius;
        let high_x = self.selector.thumb_offset(Handle::High) + radius;
        let fill = Rect::new(low_x, cy - half_track, high_x, cy + half_track);
        cx.fill(&fill, FILL_COLOR, 0.0);

        // Held thumb last so it draws on top when the two overlap
        let order = match self.held {
            Some(Handle::Low) => [Handle::High, Handle::Low],
            _ => [Handle::Low, Handle::High],
        };
        for handle in order {
            self.paint_thumb(cx, handle, cy);
        }
    }
}
