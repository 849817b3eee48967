//! Sizing, color, and default-range constants for the slider.

/// Slider widget height
pub const SLIDER_HEIGHT: f32 = 28.0;

/// Thumb diameter; thumbs travel over `track_width - THUMB_SIZE`
pub const THUMB_SIZE: f64 = 24.0;

/// Height of the painted track bar
pub const TRACK_HEIGHT: f64 = 4.0;

/// Border radius for containers
pub const RADIUS: f32 = 4.0;

/// Gap between panel elements
pub const GAP: f32 = 8.0;

/// Padding around the whole panel
pub const PADDING: f32 = 8.0;

/// Numeric input field width
pub const INPUT_WIDTH: f32 = 64.0;

/// Input font size
pub const INPUT_FONT: f32 = 11.0;

/// Label font size
pub const LABEL_FONT: f32 = 10.0;

/// Value readout font size
pub const VALUE_FONT: f32 = 13.0;

// Monthly budget filter on the listing search screen

pub const BUDGET_MIN: f64 = 400.0;
pub const BUDGET_MAX: f64 = 50_000.0;
pub const BUDGET_STEP: f64 = 100.0;
pub const BUDGET_MIN_GAP: f64 = 1_000.0;

/// Prefix for formatted amounts
pub const CURRENCY_SYMBOL: &str = "$";
