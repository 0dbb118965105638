//! Typed lookups into a lesson's JSON params object.
//!
//! Every helper takes the params value, a key and a default, and falls back
//! to the default when the key is missing or holds the wrong JSON type.
//! They never fail.

use glam::Vec2;
use serde_json::Value;

/// Reads `params[name]` as `f32`. Integers are accepted.
pub fn param_f32(params: &Value, name: &str, default: f32) -> f32 {
    params
        .get(name)
        .and_then(Value::as_f64)
        .map(|v| v as f32)
        .unwrap_or(default)
}

/// Reads `params[name]` as a non-negative integer.
pub fn param_usize(params: &Value, name: &str, default: usize) -> usize {
    params
        .get(name)
        .and_then(Value::as_u64)
        .and_then(|v| usize::try_from(v).ok())
        .unwrap_or(default)
}

/// Reads `params[name]` as a `u32`, falling back when it does not fit.
pub fn param_u32(params: &Value, name: &str, default: u32) -> u32 {
    params
        .get(name)
        .and_then(Value::as_u64)
        .and_then(|v| u32::try_from(v).ok())
        .unwrap_or(default)
}

/// Reads `params[name]` as a two-element numeric array `[x, y]`.
///
/// Anything else (wrong length, non-numbers) yields `default`.
pub fn param_vec2(params: &Value, name: &str, default: Vec2) -> Vec2 {
    let Some(items) = params.get(name).and_then(Value::as_array) else {
        return default;
    };
    match items.as_slice() {
        [x, y] => match (x.as_f64(), y.as_f64()) {
            (Some(x), Some(y)) => Vec2::new(x as f32, y as f32),
            _ => default,
        },
        _ => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn param_f32_reads_floats_and_integers() {
        let params = json!({"angle": 45.5, "count": 3});
        assert_eq!(param_f32(&params, "angle", 0.0), 45.5);
        assert_eq!(param_f32(&params, "count", 0.0), 3.0);
    }

    #[test]
    fn param_f32_falls_back_on_missing_or_wrong_type() {
        let params = json!({"angle": "steep"});
        assert_eq!(param_f32(&params, "angle", 9.0), 9.0);
        assert_eq!(param_f32(&params, "other", 2.0), 2.0);
        assert_eq!(param_f32(&json!(null), "angle", 1.0), 1.0);
    }

    #[test]
    fn param_usize_rejects_negative_and_fractional() {
        let params = json!({"a": -1, "b": 2.5, "c": 50});
        assert_eq!(param_usize(&params, "a", 7), 7);
        assert_eq!(param_usize(&params, "b", 7), 7);
        assert_eq!(param_usize(&params, "c", 7), 50);
    }

    #[test]
    fn param_u32_rejects_overflow() {
        let params = json!({"cap": 5_000_000_000u64, "ok": 500});
        assert_eq!(param_u32(&params, "cap", 1), 1);
        assert_eq!(param_u32(&params, "ok", 1), 500);
    }

    #[test]
    fn param_vec2_reads_pairs() {
        let params = json!({"translation": [200, 150.5]});
        assert_eq!(
            param_vec2(&params, "translation", Vec2::ZERO),
            Vec2::new(200.0, 150.5)
        );
    }

    #[test]
    fn param_vec2_falls_back_on_bad_shape() {
        let params = json!({"a": [1.0], "b": [1.0, "x"], "c": {"x": 1}});
        for key in ["a", "b", "c", "missing"] {
            assert_eq!(param_vec2(&params, key, Vec2::ONE), Vec2::ONE, "key {key}");
        }
    }
}
