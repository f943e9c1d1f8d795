//! Macros for declaring validatable types with minimal boilerplate.
//!
//! # Available Macros
//!
//! - [`record!`] — Implement [`Record`](crate::foundation::Record) for plain structs

// ============================================================================
// RECORD MACRO
// ============================================================================

/// Implements [`Record`](crate::foundation::Record) for one or more types.
///
/// The generated impls keep the default `is_record`, so values of these types
/// always pass the record shape check.
///
/// Generic parameters may carry one bound each, written as a path
/// (`Wrap<T: Clone>`). Types needing several bounds per parameter or a
/// `where` clause implement `Record` by hand.
///
/// # Examples
///
/// ```
/// use sift_validator::prelude::*;
///
/// struct Address {
///     city: String,
/// }
///
/// struct Company<T> {
///     name: String,
///     extra: T,
/// }
///
/// struct Tagged<T: Clone> {
///     tag: T,
/// }
///
/// sift_validator::record!(Address, Company<T>, Tagged<T: Clone>);
///
/// let mut address = Address { city: "Oslo".into() };
/// let errors = record(&mut address)
///     .fields(|a| vec![string(&mut a.city).min(2).boxed()])
///     .parse();
/// assert!(errors.is_empty());
/// ```
#[macro_export]
macro_rules! record {
    // ── Generic type: `Name<T, U: Bound>` ───────────────────────────────
    (@one $name:ident < $($param:ident $(: $bound:path)?),+ >) => {
        impl<$($param $(: $bound)?),+> $crate::foundation::Record for $name<$($param),+> {}
    };

    // ── Plain type ──────────────────────────────────────────────────────
    (@one $name:ident) => {
        impl $crate::foundation::Record for $name {}
    };

    ($($name:ident $(< $($param:ident $(: $bound:path)?),+ >)?),+ $(,)?) => {
        $(
            $crate::record!(@one $name $(< $($param $(: $bound)?),+ >)?);
        )+
    };
}
