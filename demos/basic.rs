//! Standalone demo: opens a window with the budget filter.
//!
//! Run with `RUST_LOG=floem_range=debug` to watch drag sessions.

use floem::prelude::*;
use floem::window::WindowConfig;
use floem_range::{RangeConfig, RangeValues, budget_filter, format_range};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let values = RwSignal::new(RangeValues::default());
    let config = RangeConfig::budget().with_initial(400.0, 25_000.0);

    floem::Application::new()
        .window(
            move |_| {
                budget_filter(values, config, |v| {
                    tracing::info!("budget committed: {}", format_range(v));
                })
                .expect("budget preset is a valid configuration")
                .on_event_stop(floem::event::EventListener::WindowClosed, |_| {
                    floem::quit_app()
                })
            },
            Some(
                WindowConfig::default()
                    .size((360.0, 160.0))
                    .title("floem-range"),
            ),
        )
        .run();
}
