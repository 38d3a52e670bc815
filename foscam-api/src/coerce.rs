//! Boolean/number translation for request and response fields.
//!
//! The CGI API encodes every on/off setting as `0` or `1`. These helpers are
//! the single place where that encoding meets `bool`. Only the exact values
//! `0` and `1` are translated; any other number is left alone so that fields
//! holding small enumerations are never mistaken for flags.

use serde_json::Value;

/// A plain key/value options object, mutated in place by the helpers below
pub type Options = serde_json::Map<String, Value>;

/// Replace `container[field]` with `false` if it is exactly `0`, or `true`
/// if it is exactly `1`.
///
/// A missing container, an empty field name or a missing field is a no-op,
/// as is any other value.
///
/// ```rust
/// use foscam_api::coerce::{number_to_boolean, Options};
/// use serde_json::json;
///
/// let mut options: Options = serde_json::from_value(json!({"num": 1, "mode": 3})).unwrap();
/// number_to_boolean(Some(&mut options), "num");
/// number_to_boolean(Some(&mut options), "mode");
/// assert_eq!(options["num"], json!(true));
/// assert_eq!(options["mode"], json!(3));
/// ```
pub fn number_to_boolean(container: Option<&mut Options>, field: &str) {
    let Some(container) = container else {
        return;
    };
    if field.is_empty() {
        return;
    }
    let Some(value) = container.get_mut(field) else {
        return;
    };

    let flag = match value.as_f64() {
        Some(n) if n == 0.0 => false,
        Some(n) if n == 1.0 => true,
        _ => return,
    };
    *value = Value::Bool(flag);
}

/// `true -> 1`, `false -> 0`
pub fn boolean_to_number(value: bool) -> u8 {
    u8::from(value)
}

/// Encode every boolean field of `container` as `0`/`1`
pub fn encode_booleans(container: &mut Options) {
    for value in container.values_mut() {
        if let Value::Bool(flag) = *value {
            *value = Value::from(boolean_to_number(flag));
        }
    }
}

/// Apply [`number_to_boolean`] to each of `fields`
pub fn decode_booleans(container: &mut Options, fields: &[&str]) {
    for field in fields {
        number_to_boolean(Some(&mut *container), field);
    }
}
