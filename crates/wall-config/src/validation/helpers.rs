//! Shared clamping helpers used by the range normalisers.

/// Clamp `value` into `[min, max]`, recording a note when it moves.
pub(crate) fn clamp_i64(notes: &mut Vec<String>, name: &str, value: &mut i64, min: i64, max: i64) {
    let clamped = (*value).clamp(min, max);
    if clamped != *value {
        notes.push(format!("{name} = {value} clamped to {clamped}"));
        *value = clamped;
    }
}

/// Clamp `value` into `[min, max]` (float). NaN becomes `min`.
pub(crate) fn clamp_f64(notes: &mut Vec<String>, name: &str, value: &mut f64, min: f64, max: f64) {
    let clamped = if value.is_nan() {
        min
    } else {
        value.clamp(min, max)
    };
    if clamped != *value || value.is_nan() {
        notes.push(format!("{name} = {value} clamped to {clamped}"));
        *value = clamped;
    }
}
