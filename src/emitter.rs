//! Delivers accepted values to whoever hosts the selector.

use crate::domain::RangeValues;

type Listener = Box<dyn Fn(RangeValues)>;

/// Holds the `on_change` / `on_commit` callbacks.
///
/// `change` fires on every accepted update while dragging; `commit` fires
/// once when a gesture (or a programmatic edit) settles.
#[derive(Default)]
pub struct ChangeEmitter {
    on_change: Option<Listener>,
    on_commit: Option<Listener>,
}

impl ChangeEmitter {
    pub fn set_on_change(&mut self, f: impl Fn(RangeValues) + 'static) {
        self.on_change = Some(Box::new(f));
    }

    pub fn set_on_commit(&mut self, f: impl Fn(RangeValues) + 'static) {
        self.on_commit = Some(Box::new(f));
    }

    pub fn change(&self, values: RangeValues) {
        if let Some(cb) = &self.on_change {
            cb(values);
        }
    }

    pub fn commit(&self, values: RangeValues) {
        if let Some(cb) = &self.on_commit {
            cb(values);
        }
    }
}

impl std::fmt::Debug for ChangeEmitter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChangeEmitter")
            .field("on_change", &self.on_change.is_some())
            .field("on_commit", &self.on_commit.is_some())
            .finish()
    }
}
