//! Core traits for the validation engine
//!
//! - [`Evaluate`] is the one capability every field builder shares. Record
//!   builders aggregate nested fields through it without knowing their kinds.
//! - [`Record`] marks values a record builder may target.

use crate::foundation::ValidationError;

// ============================================================================
// EVALUATE
// ============================================================================

/// Runs a configured field and reports its errors.
///
/// Implemented by [`Field`](crate::pipeline::Field) for every value kind,
/// records included, so nesting depth is unbounded.
///
/// # Examples
///
/// ```
/// use sift_validator::prelude::*;
///
/// let mut name = String::from("ab");
/// let mut age = 12_u32;
///
/// let mut fields: Vec<Box<dyn Evaluate + '_>> = vec![
///     string(&mut name).named("name").min(3).boxed(),
///     number(&mut age).named("age").min(18).boxed(),
/// ];
///
/// let mut errors = Vec::new();
/// let all_ok = fields.iter_mut().fold(true, |ok, f| f.evaluate(&mut errors) && ok);
/// assert!(!all_ok);
/// assert_eq!(errors.len(), 2);
/// ```
pub trait Evaluate {
    /// Evaluates the field, appending any failures to `errors`.
    ///
    /// Returns `true` if the field passed (an absent optional field passes).
    fn evaluate(&mut self, errors: &mut Vec<ValidationError>) -> bool;
}

impl<E: Evaluate + ?Sized> Evaluate for Box<E> {
    fn evaluate(&mut self, errors: &mut Vec<ValidationError>) -> bool {
        (**self).evaluate(errors)
    }
}

// ============================================================================
// RECORD
// ============================================================================

/// Values that a record builder can target.
///
/// Plain structs implement this with an empty impl (or via
/// [`record!`](crate::record!)) and always qualify. Dynamic values override
/// [`is_record`](Record::is_record) so the record builder can reject them at
/// evaluation time with an `invalid-type` error.
///
/// ```
/// use sift_validator::foundation::Record;
///
/// struct User {
///     name: String,
/// }
///
/// impl Record for User {}
/// ```
pub trait Record {
    /// Returns true if this value is a structured record.
    fn is_record(&self) -> bool {
        true
    }
}

impl<R: Record + ?Sized> Record for Box<R> {
    fn is_record(&self) -> bool {
        (**self).is_record()
    }
}
