//! Core validation types and traits
//!
//! This module contains the building blocks shared by every field kind:
//!
//! - **Traits**: [`Evaluate`], [`Record`]
//! - **Categories**: [`Number`], [`Sequence`], [`Mapping`]
//! - **Errors**: [`ValidationError`], [`ValidationErrors`], [`codes`]
//! - **Options**: [`FieldOptions`], [`RefinementData`]

pub mod category;
pub mod error;
pub mod options;
pub mod traits;

pub use category::{Mapping, Number, Sequence};
pub use error::{ValidationError, ValidationErrors, codes};
pub use options::{FieldOptions, RefinementData};
pub use traits::{Evaluate, Record};

// ============================================================================
// UTILITIES
// ============================================================================

/// Evaluates several independent fields and returns all of their errors.
///
/// Every field is evaluated even if an earlier one fails; each field's own
/// abort-early setting only truncates that field's errors.
///
/// # Examples
///
/// ```
/// use sift_validator::prelude::*;
///
/// let mut email = String::from("not-an-email");
/// let mut accepted = false;
///
/// let errors = evaluate_all([
///     string(&mut email).named("email").email().boxed(),
///     boolean(&mut accepted).named("terms").is(true).boxed(),
/// ]);
/// assert_eq!(errors.len(), 2);
/// ```
pub fn evaluate_all<'a, I>(fields: I) -> Vec<ValidationError>
where
    I: IntoIterator<Item = Box<dyn Evaluate + 'a>>,
{
    let mut errors = Vec::new();
    for mut field in fields {
        field.evaluate(&mut errors);
    }
    errors
}
