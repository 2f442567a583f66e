//! Helpers for merging JSON option patches over existing configuration.
//!
//! The merge rule is falsy-retain: a field that is absent, null, the wrong
//! type, zero, or NaN keeps the prior value. Zero counting as "unset" is the
//! documented contract of the option patches, carried over from the source's
//! `options.field || prior` merging — callers cannot patch a field to 0.

use serde_json::Value;

/// Extracts `patch[name]` as an `f64`, returning `prior` when the field is
/// absent, non-numeric, zero, or NaN.
pub fn patch_f64(patch: &Value, name: &str, prior: f64) -> f64 {
    match patch.get(name).and_then(Value::as_f64) {
        Some(v) if v != 0.0 && !v.is_nan() => v,
        _ => prior,
    }
}
