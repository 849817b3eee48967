//! The dual-handle selector engine.
//!
//! [`RangeSelector`] owns the domain, the current selection and one
//! [`GestureTracker`] per handle. Host views forward layout width and
//! pointer events; the selector resolves each proposal and reports accepted
//! values through its [`ChangeEmitter`].
//!
//! All mutation goes through `&mut self`, so resolve-and-apply is never
//! interleaved. A host on a multi-threaded event source should keep the
//! selector behind a `Mutex`.

use tracing::{debug, trace};

use crate::config::RangeConfig;
use crate::domain::{Domain, Handle, RangeValues, SelectionState};
use crate::emitter::ChangeEmitter;
use crate::error::Result;
use crate::gesture::GestureTracker;
use crate::math;
use crate::resolver;

/// A programmatic edit: typed input, a step button, or a reset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SelectorCommand {
    Set(Handle, f64),
    Nudge(Handle, i32),
    Reset,
}

#[derive(Debug)]
pub struct RangeSelector {
    domain: Domain,
    state: SelectionState,
    initial: SelectionState,
    thumb_size: f64,
    track_width: f64,
    trackers: [GestureTracker; 2],
    emitter: ChangeEmitter,
}

impl RangeSelector {
    /// Validates `config` and clamps its initial values into a legal selection.
    pub fn new(config: &RangeConfig) -> Result<Self> {
        let domain = config.domain()?;
        let state = domain.clamp_pair(config.initial_low, config.initial_high);
        if config.initial_low.is_some_and(|v| v != state.low)
            || config.initial_high.is_some_and(|v| v != state.high)
        {
            debug!(
                requested_low = ?config.initial_low,
                requested_high = ?config.initial_high,
                low = state.low,
                high = state.high,
                "initial range clamped"
            );
        }
        let thumb_size = if config.thumb_size.is_finite() {
            config.thumb_size.max(0.0)
        } else {
            0.0
        };
        Ok(Self {
            domain,
            state,
            initial: state,
            thumb_size,
            track_width: 0.0,
            trackers: [
                GestureTracker::new(Handle::Low),
                GestureTracker::new(Handle::High),
            ],
            emitter: ChangeEmitter::default(),
        })
    }

    pub fn on_change(mut self, f: impl Fn(RangeValues) + 'static) -> Self {
        self.emitter.set_on_change(f);
        self
    }

    pub fn on_commit(mut self, f: impl Fn(RangeValues) + 'static) -> Self {
        self.emitter.set_on_commit(f);
        self
    }

    pub fn set_on_change(&mut self, f: impl Fn(RangeValues) + 'static) {
        self.emitter.set_on_change(f);
    }

    pub fn set_on_commit(&mut self, f: impl Fn(RangeValues) + 'static) {
        self.emitter.set_on_commit(f);
    }

    pub fn domain(&self) -> &Domain {
        &self.domain
    }

    /// Current `(low, high)`.
    pub fn values(&self) -> RangeValues {
        self.state
    }

    pub fn thumb_size(&self) -> f64 {
        self.thumb_size
    }

    pub fn track_width(&self) -> f64 {
        self.track_width
    }

    /// Records the measured track width. Drags already in progress keep the
    /// width they started with.
    pub fn report_track_width(&mut self, pixels: f64) {
        if !pixels.is_finite() {
            debug!(pixels, "ignoring non-finite track width");
            return;
        }
        let pixels = pixels.max(0.0);
        if pixels != self.track_width {
            debug!(from = self.track_width, to = pixels, "track width changed");
            self.track_width = pixels;
        }
    }

    pub fn is_dragging(&self, handle: Handle) -> bool {
        self.trackers[handle.index()].is_active()
    }

    /// Number of drags currently open (0, 1 or 2).
    pub fn active_sessions(&self) -> usize {
        self.trackers.iter().filter(|t| t.is_active()).count()
    }

    /// Starts dragging `handle`. `pixel_position` is where the pointer went
    /// down; the drag itself is anchored at the thumb.
    ///
    /// Returns `false` (and opens nothing) while the track width is unknown.
    pub fn on_pointer_down(&mut self, handle: Handle, pixel_position: f64) -> bool {
        if self.track_width <= 0.0 {
            debug!(?handle, "pointer down before layout, ignored");
            return false;
        }
        if self.is_dragging(handle) {
            debug!(?handle, "pointer down during an open drag, settling it first");
            self.finish(handle);
        }
        let start_value = self.state.get(handle);
        let tracker = &mut self.trackers[handle.index()];
        let session = tracker.begin(
            &self.domain,
            start_value,
            pixel_position,
            self.track_width,
            self.thumb_size,
        );
        debug!(
            ?handle,
            start_value,
            start_offset = session.start_pixel_offset,
            "drag started"
        );
        true
    }

    /// Feeds a cumulative horizontal delta since pointer-down.
    pub fn on_pointer_move(&mut self, handle: Handle, cumulative_dx: f64) {
        let proposed = self.trackers[handle.index()].propose(&self.domain, cumulative_dx);
        self.accept_proposal(handle, proposed);
    }

    /// Feeds an absolute pointer position in track coordinates.
    pub fn on_pointer_move_to(&mut self, handle: Handle, pointer_x: f64) {
        let proposed = self.trackers[handle.index()].propose_at(&self.domain, pointer_x);
        self.accept_proposal(handle, proposed);
    }

    pub fn on_pointer_up(&mut self, handle: Handle) {
        if !self.finish(handle) {
            debug!(?handle, "pointer up without a drag, ignored");
        }
    }

    /// Interrupted gestures settle exactly like a release.
    pub fn on_pointer_cancel(&mut self, handle: Handle) {
        if !self.finish(handle) {
            debug!(?handle, "pointer cancel without a drag, ignored");
        } else {
            debug!(?handle, "drag cancelled");
        }
    }

    /// Sets one handle directly (typed input, external binding).
    ///
    /// The value goes through the same clamping as a drag. Always commits.
    pub fn set_value(&mut self, handle: Handle, value: f64) {
        self.apply(handle, value);
        self.emitter.commit(self.state);
    }

    /// Moves one handle by whole grid steps. Always commits.
    pub fn nudge(&mut self, handle: Handle, steps: i32) {
        let proposed = self.state.get(handle) + f64::from(steps) * self.domain.step();
        self.set_value(handle, proposed);
    }

    /// Restores the initial selection. Always commits.
    pub fn reset(&mut self) {
        if self.state != self.initial {
            self.state = self.initial;
            self.emitter.change(self.state);
        }
        self.emitter.commit(self.state);
    }

    /// Runs a [`SelectorCommand`]; every command commits once.
    pub fn execute(&mut self, command: SelectorCommand) {
        debug!(?command, "executing command");
        match command {
            SelectorCommand::Set(handle, value) => self.set_value(handle, value),
            SelectorCommand::Nudge(handle, steps) => self.nudge(handle, steps),
            SelectorCommand::Reset => self.reset(),
        }
    }

    /// Adopts an externally supplied pair, clamped into the domain.
    ///
    /// Used to follow a bound value that someone else wrote. Emits nothing;
    /// returns the pair actually held, which differs from `values` only if
    /// clamping had to move it. Open drags are re-anchored at the new values.
    pub fn sync_values(&mut self, values: RangeValues) -> RangeValues {
        let settled = self.domain.clamp_pair(Some(values.low), Some(values.high));
        if settled != self.state {
            trace!(low = settled.low, high = settled.high, "synced external values");
            self.state = settled;
            for tracker in self.trackers.iter_mut().filter(|t| t.is_active()) {
                let value = settled.get(tracker.handle());
                debug!(handle = ?tracker.handle(), value, "drag re-anchored after sync");
                tracker.reanchor(&self.domain, value);
            }
        }
        settled
    }

    /// Left edge of `handle`'s thumb in track pixels.
    pub fn thumb_offset(&self, handle: Handle) -> f64 {
        math::usable_width(self.track_width, self.thumb_size)
            .map(|usable| {
                math::value_to_offset(
                    self.state.get(handle),
                    usable,
                    self.domain.min(),
                    self.domain.max(),
                )
            })
            .unwrap_or(0.0)
    }

    /// Which thumb a press at `pixel_x` should grab.
    ///
    /// Nearest thumb centre wins. When the thumbs overlap, a press left of
    /// the shared centre takes `Low` and anything else takes `High`, so the
    /// grabbed handle is always free to follow the pointer.
    pub fn handle_at(&self, pixel_x: f64) -> Handle {
        let half = self.thumb_size / 2.0;
        let low_centre = self.thumb_offset(Handle::Low) + half;
        let high_centre = self.thumb_offset(Handle::High) + half;
        let to_low = (pixel_x - low_centre).abs();
        let to_high = (pixel_x - high_centre).abs();
        if to_low < to_high || (to_low == to_high && pixel_x < low_centre) {
            Handle::Low
        } else {
            Handle::High
        }
    }

    fn accept_proposal(&mut self, handle: Handle, proposed: Option<f64>) {
        match proposed {
            Some(value) => {
                self.apply(handle, value);
            }
            None => debug!(?handle, "pointer move without a drag, ignored"),
        }
    }

    /// Resolves and applies a proposal; emits a change if the state moved.
    fn apply(&mut self, handle: Handle, proposed: f64) -> bool {
        match resolver::resolve(&self.domain, &self.state, handle, proposed) {
            Some(next) => {
                trace!(?handle, proposed, low = next.low, high = next.high, "accepted");
                self.state = next;
                self.emitter.change(next);
                true
            }
            None => {
                trace!(?handle, proposed, "no change");
                false
            }
        }
    }

    /// Closes `handle`'s drag and commits. Returns `false` if none was open.
    fn finish(&mut self, handle: Handle) -> bool {
        match self.trackers[handle.index()].end() {
            Some(session) => {
                debug!(
                    ?handle,
                    start_value = session.start_value,
                    low = self.state.low,
                    high = self.state.high,
                    "drag committed"
                );
                self.emitter.commit(self.state);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    type Log = Rc<RefCell<Vec<RangeValues>>>;

    /// 0..=100 in steps of 1, 120px track with a 20px thumb: 1px per unit.
    fn selector() -> (RangeSelector, Log, Log) {
        let changes: Log = Rc::default();
        let commits: Log = Rc::default();
        let (c, m) = (changes.clone(), commits.clone());
        let mut s = RangeSelector::new(
            &RangeConfig::new(0.0, 100.0, 1.0, 10.0)
                .with_initial(20.0, 80.0)
                .with_thumb_size(20.0),
        )
        .unwrap()
        .on_change(move |v| c.borrow_mut().push(v))
        .on_commit(move |v| m.borrow_mut().push(v));
        s.report_track_width(120.0);
        (s, changes, commits)
    }

    #[test]
    fn gestures_before_layout_are_inert() {
        let (mut s, changes, commits) = selector();
        s.report_track_width(0.0);
        assert!(!s.on_pointer_down(Handle::Low, 30.0));
        s.on_pointer_move(Handle::Low, 40.0);
        s.on_pointer_up(Handle::Low);
        assert_eq!(s.values(), RangeValues::new(20.0, 80.0));
        assert!(changes.borrow().is_empty());
        assert!(commits.borrow().is_empty());
    }

    #[test]
    fn drag_emits_changes_then_one_commit() {
        let (mut s, changes, commits) = selector();
        assert!(s.on_pointer_down(Handle::Low, 31.0));
        s.on_pointer_move(Handle::Low, 5.0);
        s.on_pointer_move(Handle::Low, 5.2);
        s.on_pointer_move(Handle::Low, 10.0);
        s.on_pointer_up(Handle::Low);
        assert_eq!(
            *changes.borrow(),
            vec![RangeValues::new(25.0, 80.0), RangeValues::new(30.0, 80.0)]
        );
        assert_eq!(*commits.borrow(), vec![RangeValues::new(30.0, 80.0)]);
        assert!(!s.is_dragging(Handle::Low));
    }

    #[test]
    fn absolute_moves_are_relative_to_the_press() {
        let (mut s, _, _) = selector();
        // press near the right edge of the low thumb; no jump on the first move
        s.on_pointer_down(Handle::Low, 38.0);
        s.on_pointer_move_to(Handle::Low, 38.0);
        assert_eq!(s.values().low, 20.0);
        s.on_pointer_move_to(Handle::Low, 45.0);
        assert_eq!(s.values().low, 27.0);
    }

    #[test]
    fn cancel_commits_like_release() {
        let (mut s, _, commits) = selector();
        s.on_pointer_down(Handle::High, 90.0);
        s.on_pointer_move(Handle::High, -30.0);
        s.on_pointer_cancel(Handle::High);
        assert_eq!(*commits.borrow(), vec![RangeValues::new(20.0, 50.0)]);
    }

    #[test]
    fn spurious_events_are_ignored() {
        let (mut s, changes, commits) = selector();
        s.on_pointer_move(Handle::High, 10.0);
        s.on_pointer_up(Handle::High);
        s.on_pointer_cancel(Handle::Low);
        assert!(changes.borrow().is_empty());
        assert!(commits.borrow().is_empty());
    }

    #[test]
    fn repeated_down_settles_the_previous_drag() {
        let (mut s, _, commits) = selector();
        s.on_pointer_down(Handle::Low, 30.0);
        s.on_pointer_move(Handle::Low, 4.0);
        s.on_pointer_down(Handle::Low, 34.0);
        s.on_pointer_up(Handle::Low);
        assert_eq!(commits.borrow().len(), 2);
    }

    #[test]
    fn interleaved_drags_read_each_others_latest_value() {
        let (mut s, _, commits) = selector();
        s.on_pointer_down(Handle::Low, 30.0);
        s.on_pointer_down(Handle::High, 90.0);
        assert_eq!(s.active_sessions(), 2);
        s.on_pointer_move(Handle::High, -40.0);
        s.on_pointer_move(Handle::Low, 60.0);
        assert_eq!(s.values(), RangeValues::new(30.0, 40.0));
        s.on_pointer_up(Handle::High);
        s.on_pointer_up(Handle::Low);
        assert_eq!(commits.borrow().len(), 2);
        assert_eq!(s.active_sessions(), 0);
    }

    #[test]
    fn resize_mid_drag_keeps_the_captured_width() {
        let (mut s, _, _) = selector();
        s.on_pointer_down(Handle::Low, 30.0);
        s.report_track_width(220.0);
        s.on_pointer_move(Handle::Low, 10.0);
        assert_eq!(s.values().low, 30.0);
        s.on_pointer_up(Handle::Low);
        assert_eq!(s.thumb_offset(Handle::Low), 60.0);
    }

    #[test]
    fn set_value_and_nudge_go_through_the_resolver() {
        let (mut s, changes, commits) = selector();
        s.set_value(Handle::High, 5.0);
        assert_eq!(s.values(), RangeValues::new(20.0, 30.0));
        s.nudge(Handle::Low, 50);
        assert_eq!(s.values(), RangeValues::new(20.0, 30.0));
        s.nudge(Handle::Low, -3);
        assert_eq!(s.values(), RangeValues::new(17.0, 30.0));
        assert_eq!(changes.borrow().len(), 2);
        assert_eq!(commits.borrow().len(), 3);
    }

    #[test]
    fn commands_commit_once_each() {
        let (mut s, changes, commits) = selector();
        s.execute(SelectorCommand::Set(Handle::Low, 1_000.0));
        s.execute(SelectorCommand::Nudge(Handle::High, 5));
        s.execute(SelectorCommand::Nudge(Handle::Low, 0));
        s.execute(SelectorCommand::Reset);
        assert_eq!(
            *changes.borrow(),
            vec![
                RangeValues::new(70.0, 80.0),
                RangeValues::new(70.0, 85.0),
                RangeValues::new(20.0, 80.0),
            ]
        );
        assert_eq!(
            *commits.borrow(),
            vec![
                RangeValues::new(70.0, 80.0),
                RangeValues::new(70.0, 85.0),
                RangeValues::new(70.0, 85.0),
                RangeValues::new(20.0, 80.0),
            ]
        );
    }

    #[test]
    fn reset_restores_initial_values() {
        let (mut s, _, commits) = selector();
        s.set_value(Handle::Low, 50.0);
        s.reset();
        assert_eq!(s.values(), RangeValues::new(20.0, 80.0));
        assert_eq!(commits.borrow().last(), Some(&RangeValues::new(20.0, 80.0)));
    }

    #[test]
    fn sync_values_clamps_silently() {
        let (mut s, changes, commits) = selector();
        assert_eq!(
            s.sync_values(RangeValues::new(40.0, 60.0)),
            RangeValues::new(40.0, 60.0)
        );
        assert_eq!(
            s.sync_values(RangeValues::new(95.0, 98.0)),
            RangeValues::new(88.0, 98.0)
        );
        assert_eq!(s.values(), RangeValues::new(88.0, 98.0));
        assert!(changes.borrow().is_empty());
        assert!(commits.borrow().is_empty());
    }

    #[test]
    fn sync_mid_drag_does_not_snap_back() {
        let (mut s, changes, commits) = selector();
        s.on_pointer_down(Handle::Low, 30.0);
        s.on_pointer_move(Handle::Low, 5.0);
        assert_eq!(s.values().low, 25.0);

        s.sync_values(RangeValues::new(40.0, 80.0));
        s.on_pointer_move(Handle::Low, 5.0);
        assert_eq!(s.values().low, 40.0);
        s.on_pointer_move(Handle::Low, 6.0);
        assert_eq!(s.values().low, 41.0);

        s.on_pointer_up(Handle::Low);
        assert_eq!(
            *changes.borrow(),
            vec![RangeValues::new(25.0, 80.0), RangeValues::new(41.0, 80.0)]
        );
        assert_eq!(*commits.borrow(), vec![RangeValues::new(41.0, 80.0)]);
    }

    #[test]
    fn handle_at_picks_the_nearest_thumb() {
        let (mut s, _, _) = selector();
        // low thumb centre 30, high thumb centre 90
        assert_eq!(s.handle_at(0.0), Handle::Low);
        assert_eq!(s.handle_at(59.0), Handle::Low);
        assert_eq!(s.handle_at(61.0), Handle::High);
        assert_eq!(s.handle_at(200.0), Handle::High);

        // overlapping thumbs: left of centre grabs low
        s.report_track_width(20.0 + 1.0);
        assert_eq!(s.handle_at(0.0), Handle::Low);
        assert_eq!(s.handle_at(15.0), Handle::High);
    }
}
