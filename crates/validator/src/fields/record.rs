//! Record fields
//!
//! A record builder validates a structured value by projecting it into member
//! fields. The projection is re-run on every evaluation, so each member field
//! borrows from the record only while that evaluation lasts.

use crate::foundation::{Evaluate, Record};
use crate::pipeline::Field;

/// Creates a builder over a record.
///
/// # Examples
///
/// ```
/// use sift_validator::prelude::*;
///
/// struct User {
///     name: String,
///     age: u32,
/// }
///
/// sift_validator::record!(User);
///
/// let mut user = User { name: "Al".into(), age: 16 };
///
/// let errors = record(&mut user)
///     .named("user")
///     .fields(|user| {
///         vec![
///             string(&mut user.name).named("name").min(3).boxed(),
///             number(&mut user.age).named("age").min(18).boxed(),
///         ]
///     })
///     .parse();
///
/// let fields: Vec<_> = errors.iter().map(|e| e.field.as_ref()).collect();
/// assert_eq!(fields, vec!["name", "age"]);
/// ```
pub fn record<T: Record>(target: &mut T) -> Field<'_, T> {
    record_from_option(Some(target))
}

/// Creates a builder over a record that may be missing.
pub fn record_from_option<T: Record>(target: Option<&mut T>) -> Field<'_, T> {
    Field::from_option(target).with_shape(T::is_record)
}

impl<'a, T: Record> Field<'a, T> {
    /// Attaches member fields.
    ///
    /// `projection` receives the live record and returns one builder per
    /// member. Members are evaluated in the returned order; each counts as a
    /// separate action under abort-early, so the record stops at the first
    /// failing member.
    pub fn fields<P>(self, projection: P) -> Self
    where
        P: for<'r> Fn(&'r mut T) -> Vec<Box<dyn Evaluate + 'r>> + 'a,
    {
        self.nest(Box::new(projection))
    }
}
