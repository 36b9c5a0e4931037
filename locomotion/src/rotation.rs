use crate::math::{InputSample, snap_steps, within_band};

/// Snap-turn angle for one axis sample.
///
/// Returns `None` when `sample.y` is outside `(-axis_y_limit, axis_y_limit)`; such a
/// sample does not consume the one-shot turn. Otherwise the horizontal deflection is
/// quantized to whole steps (see [`snap_steps`]) and scaled by `sensitivity`, which
/// may yield a zero-degree turn for small deflection.
#[inline]
pub fn snap_turn_degrees(sample: InputSample, axis_y_limit: f32, sensitivity: f32) -> Option<f32> {
    if !within_band(sample.y, axis_y_limit) {
        return None;
    }
    Some(snap_steps(sample.x) as f32 * sensitivity)
}
