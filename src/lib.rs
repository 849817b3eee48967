//! # floem-range
//!
//! A dual-handle range slider for [Floem](https://github.com/lapce/floem),
//! built for budget filters on listing search screens.
//!
//! Two thumbs select a `[low, high]` sub-range of a bounded domain. Values
//! snap to a step grid, and the thumbs never cross or come closer than a
//! configured minimum gap. The value logic lives in [`RangeSelector`], which
//! has no Floem dependency in its API and can be driven directly by any
//! pointer-event source.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use floem::prelude::*;
//! use floem_range::{budget_filter, RangeConfig, RangeValues};
//!
//! let values = RwSignal::new(RangeValues::default());
//! let config = RangeConfig::budget().with_initial(400.0, 25_000.0);
//! // Use `budget_filter(values, config, |v| println!("{v:?}"))` in your Floem view tree.
//! ```

mod budget_filter;
mod config;
mod constants;
mod domain;
mod emitter;
mod error;
mod gesture;
#[cfg(feature = "inputs")]
mod inputs;
mod math;
mod range_slider;
mod resolver;
mod selector;

pub use budget_filter::{format_amount, format_range};
pub use config::RangeConfig;
pub use domain::{Domain, Handle, RangeValues, SelectionState};
pub use emitter::ChangeEmitter;
pub use error::{ConfigurationError, Result};
pub use gesture::{DragSession, GestureTracker};
pub use range_slider::{RangeControl, RangeSlider, range_slider};
pub use resolver::resolve;
pub use selector::{RangeSelector, SelectorCommand};

#[cfg(feature = "inputs")]
use std::sync::Once;

use floem::prelude::*;
use floem::reactive::RwSignal;
#[cfg(feature = "inputs")]
use floem::text::FONT_SYSTEM;

#[cfg(feature = "inputs")]
static LOAD_LUCIDE_FONT: Once = Once::new();

/// Creates the budget filter panel: readouts, slider, and bound inputs.
///
/// `values` is overwritten with the clamped initial selection from
/// `config`, then follows every accepted update. `on_commit` fires once per
/// finished drag, typed entry, step press or reset.
pub fn budget_filter(
    values: RwSignal<RangeValues>,
    config: RangeConfig,
    on_commit: impl Fn(RangeValues) + 'static,
) -> Result<impl IntoView> {
    #[cfg(feature = "inputs")]
    LOAD_LUCIDE_FONT.call_once(|| {
        FONT_SYSTEM
            .lock()
            .db_mut()
            .load_font_data(lucide_icons::LUCIDE_FONT_BYTES.to_vec());
    });
    budget_filter::budget_filter_view(values, config, on_commit)
}
