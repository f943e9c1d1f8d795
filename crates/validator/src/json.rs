//! JSON support for validating dynamic `serde_json::Value` data.
//!
//! A `Value` is a [`Record`] only when it is a JSON object, so a record
//! builder over a `Value` rejects arrays, strings, numbers and `null` with an
//! `invalid-type` error before any member field runs.
//!
//! Members are reached with [`members`], which splits an object into disjoint
//! mutable borrows, and narrowed to a field kind with the `as_*` helpers. A
//! missing key or a value of the wrong JSON type becomes an absent target, so
//! the member builder reports `required` unless it is optional. JSON numbers
//! cannot be borrowed as primitives; check them with `refine` on the member.
//!
//! # Examples
//!
//! ```
//! use serde_json::Value;
//! use sift_validator::json::{as_string, members};
//! use sift_validator::prelude::*;
//! use serde_json::json;
//!
//! let mut payload = json!({ "email": "  Ada@Example.com", "age": 12 });
//!
//! let errors = record(&mut payload)
//!     .named("payload")
//!     .fields(|value| {
//!         let [email, age] = members(value, ["email", "age"]);
//!         vec![
//!             Field::from_option(as_string(email))
//!                 .named("email")
//!                 .trim()
//!                 .to_lowercase()
//!                 .email()
//!                 .boxed(),
//!             Field::from_option(age)
//!                 .named("age")
//!                 .refine(|age: &Value| match age.as_u64() {
//!                     Some(years) if years >= 18 => Ok(()),
//!                     _ => Err("age must be a number of at least 18"),
//!                 })
//!                 .boxed(),
//!         ]
//!     })
//!     .parse();
//!
//! assert_eq!(errors.len(), 1);
//! assert_eq!(errors[0].field, "age");
//! assert_eq!(payload["email"], "ada@example.com");
//! ```

use serde_json::{Map, Value};

use crate::foundation::Record;

// ============================================================================
// RECORD IMPLS
// ============================================================================

impl Record for Value {
    fn is_record(&self) -> bool {
        self.is_object()
    }
}

impl Record for Map<String, Value> {}

// ============================================================================
// MEMBER ACCESS
// ============================================================================

/// Splits an object into mutable borrows of the requested keys.
///
/// Slots stay `None` for keys that are missing, or when `value` is not an
/// object. Duplicate keys yield the member once, in the first matching slot.
pub fn members<'r, const N: usize>(
    value: &'r mut Value,
    keys: [&str; N],
) -> [Option<&'r mut Value>; N] {
    let mut slots: [Option<&'r mut Value>; N] = std::array::from_fn(|_| None);
    let Some(object) = value.as_object_mut() else {
        return slots;
    };

    for (key, member) in object.iter_mut() {
        if let Some(index) = keys.iter().position(|wanted| *wanted == key.as_str()) {
            slots[index] = Some(member);
        }
    }
    slots
}

/// Narrows a member to a JSON string.
pub fn as_string(member: Option<&mut Value>) -> Option<&mut String> {
    match member? {
        Value::String(s) => Some(s),
        _ => None,
    }
}

/// Narrows a member to a JSON boolean.
pub fn as_bool(member: Option<&mut Value>) -> Option<&mut bool> {
    match member? {
        Value::Bool(b) => Some(b),
        _ => None,
    }
}

/// Narrows a member to a JSON array.
pub fn as_array(member: Option<&mut Value>) -> Option<&mut Vec<Value>> {
    match member? {
        Value::Array(items) => Some(items),
        _ => None,
    }
}

/// Narrows a member to a JSON object, as a record target.
///
/// Pass the member straight to
/// [`record_from_option`](crate::fields::record_from_option) instead when a
/// present non-object should be reported as `invalid-type` rather than
/// `required`.
pub fn as_object(member: Option<&mut Value>) -> Option<&mut Map<String, Value>> {
    match member? {
        Value::Object(map) => Some(map),
        _ => None,
    }
}
