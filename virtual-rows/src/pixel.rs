//! Pixel-space helpers shared by the controller and its options.
//!
//! Scroll offsets and heights are non-negative, so truncating casts are used in place of
//! `floor`/`round` (which are not available in `core`).

/// Clamps NaN and negative values to zero.
pub(crate) fn non_negative(value: f32) -> f32 {
    if value > 0.0 { value } else { 0.0 }
}

/// Maps a pixel position to the index of the fixed-height row containing it.
///
/// Returns 0 for negative positions and for non-positive heights.
pub(crate) fn index_at(position: f32, item_height: f32) -> usize {
    if !(item_height > 0.0) {
        return 0;
    }
    let q = position / item_height;
    // `as` saturates and maps NaN to 0.
    if q > 0.0 { q as usize } else { 0 }
}

/// Snaps a length to the device pixel grid.
pub fn pixel_align(value: f32, pixels_per_point: f32) -> f32 {
    let value = non_negative(value);
    if !(pixels_per_point > 0.0) || !pixels_per_point.is_finite() {
        return value;
    }
    let pixels = value * pixels_per_point + 0.5;
    (pixels as u64) as f32 / pixels_per_point
}
