//! Defaulting accessors over `serde_json::Value`.
//!
//! API records are read field by field; anything missing, null or of the
//! wrong type comes back as `None` instead of failing the whole transform.

use serde_json::Value;

/// Stand-in for absent nested objects.
pub static NULL: Value = Value::Null;

/// Non-empty string at `key`.
pub fn str_field<'a>(v: &'a Value, key: &str) -> Option<&'a str> {
    v.get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

pub fn u64_field(v: &Value, key: &str) -> Option<u64> {
    v.get(key).and_then(Value::as_u64)
}

pub fn u32_field(v: &Value, key: &str) -> Option<u32> {
    u64_field(v, key).and_then(|n| u32::try_from(n).ok())
}

pub fn f64_field(v: &Value, key: &str) -> Option<f64> {
    v.get(key).and_then(Value::as_f64)
}

/// Object at `key`, `None` for anything else.
pub fn object_field<'a>(v: &'a Value, key: &str) -> Option<&'a Value> {
    v.get(key).filter(|inner| inner.is_object())
}

/// Array at `key`, empty for anything else.
pub fn array_field<'a>(v: &'a Value, key: &str) -> &'a [Value] {
    v.get(key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}
