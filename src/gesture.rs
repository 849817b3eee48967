//! Per-handle drag tracking.
//!
//! A tracker turns a stream of cumulative pointer deltas into proposed,
//! unclamped domain values. It knows nothing about the other handle; the
//! resolver arbitrates between the two.

use crate::domain::{Domain, Handle};
use crate::math;

/// State captured on pointer-down and dropped on pointer-up/cancel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    pub handle: Handle,
    /// Thumb's left edge when the drag began, derived from its value.
    pub start_pixel_offset: f64,
    pub start_value: f64,
    pub track_pixel_width: f64,
    pub thumb_size: f64,
    /// Where the pointer went down; only used by [`GestureTracker::propose_at`].
    pub pointer_origin: f64,
    /// Cumulative delta of the latest finite move.
    pub last_dx: f64,
    pub last_value: f64,
}

#[derive(Debug, Clone)]
pub struct GestureTracker {
    handle: Handle,
    session: Option<DragSession>,
}

impl GestureTracker {
    pub fn new(handle: Handle) -> Self {
        Self {
            handle,
            session: None,
        }
    }

    pub fn handle(&self) -> Handle {
        self.handle
    }

    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    /// Anchors a new drag at the handle's current value.
    ///
    /// Replaces any session that was left open.
    pub fn begin(
        &mut self,
        domain: &Domain,
        start_value: f64,
        pointer_origin: f64,
        track_pixel_width: f64,
        thumb_size: f64,
    ) -> &DragSession {
        let start_pixel_offset = math::usable_width(track_pixel_width, thumb_size)
            .map(|usable| math::value_to_offset(start_value, usable, domain.min(), domain.max()))
            .unwrap_or(0.0);
        self.session.insert(DragSession {
            handle: self.handle,
            start_pixel_offset,
            start_value,
            track_pixel_width,
            thumb_size,
            pointer_origin,
            last_dx: 0.0,
            last_value: start_value,
        })
    }

    /// Proposes a value for a cumulative delta `dx` from the drag start.
    ///
    /// Returns `None` when no drag is in progress.
    pub fn propose(&mut self, domain: &Domain, dx: f64) -> Option<f64> {
        let session = self.session.as_mut()?;
        if !dx.is_finite() {
            return Some(session.last_value);
        }
        let value = match math::usable_width(session.track_pixel_width, session.thumb_size) {
            Some(usable) => {
                let offset = (session.start_pixel_offset + dx).clamp(0.0, usable);
                math::offset_to_value(offset, usable, domain.min(), domain.max())
            }
            None => session.start_value,
        };
        session.last_dx = dx;
        session.last_value = value;
        Some(value)
    }

    /// Same as [`propose`](Self::propose) for an absolute pointer position.
    pub fn propose_at(&mut self, domain: &Domain, pointer_x: f64) -> Option<f64> {
        let origin = self.session.as_ref()?.pointer_origin;
        self.propose(domain, pointer_x - origin)
    }

    /// Moves an open drag's anchor to `value`, as if the thumb had been there
    /// when the pointer went down. Travel so far is kept, so the next move
    /// continues from `value` instead of snapping back.
    pub fn reanchor(&mut self, domain: &Domain, value: f64) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if let Some(usable) = math::usable_width(session.track_pixel_width, session.thumb_size) {
            let offset = math::value_to_offset(value, usable, domain.min(), domain.max());
            session.start_pixel_offset = offset - session.last_dx;
        }
        session.start_value = value;
        session.last_value = value;
    }

    /// Closes the drag, returning the finished session.
    pub fn end(&mut self) -> Option<DragSession> {
        self.session.take()
    }
}
