//! Indicator fields and their weights.

use symptom_core::constants::{FIELD_COUNT, PRESENT_MARKER};

/// Weight added to the risk when the field at that position is present.
pub const FIELD_WEIGHTS: [i32; FIELD_COUNT] = [60, 15, 15, 29, 0, 0, 0, -15];

/// A token marks its indicator present only when it is exactly `"Y"`.
/// Anything else, including `"y"` or garbage, is absent.
pub fn is_present(token: &str) -> bool {
    token == PRESENT_MARKER
}

/// Weight contributed by `token` at `position`. Zero for out-of-range positions.
pub fn contribution(position: usize, token: &str) -> i32 {
    match FIELD_WEIGHTS.get(position) {
        Some(weight) if is_present(token) => *weight,
        _ => 0,
    }
}
