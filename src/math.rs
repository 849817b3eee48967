//! Pixel ↔ value math for a horizontal track.
//!
//! Thumb offsets are the thumb's left edge in track coordinates, so the
//! travel available to a thumb is `track_width - thumb_size`.

/// Pixel travel available to a thumb, or `None` when the track is too
/// narrow to map anything.
pub(crate) fn usable_width(track_width: f64, thumb_size: f64) -> Option<f64> {
    let usable = track_width - thumb_size;
    (usable.is_finite() && usable > 0.0).then_some(usable)
}

/// Thumb offset (0..=usable) → domain value.
pub(crate) fn offset_to_value(offset: f64, usable: f64, min: f64, max: f64) -> f64 {
    min + (offset / usable) * (max - min)
}

/// Domain value → thumb offset (0..=usable).
pub(crate) fn value_to_offset(value: f64, usable: f64, min: f64, max: f64) -> f64 {
    (((value - min) / (max - min)) * usable).clamp(0.0, usable)
}
