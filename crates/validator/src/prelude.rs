//! Prelude module for convenient imports.
//!
//! Provides a single `use sift_validator::prelude::*;` import that brings in
//! the field constructors, the builder, and the error types.
//!
//! # Examples
//!
//! ```
//! use sift_validator::prelude::*;
//!
//! let mut port = 80_u16;
//! let mut host = String::from("example.com");
//!
//! let errors = evaluate_all([
//!     number(&mut port).named("port").min(1024).boxed(),
//!     string(&mut host).named("host").min(1).boxed(),
//! ]);
//! assert_eq!(errors.len(), 1);
//! ```

// ============================================================================
// FOUNDATION: Core traits, errors, options
// ============================================================================

pub use crate::foundation::{
    Evaluate, FieldOptions, Record, RefinementData, ValidationError, ValidationErrors,
    evaluate_all,
};

// ============================================================================
// FIELDS: Constructors and the builder
// ============================================================================

pub use crate::fields::{
    boolean, mapping, number, record, record_from_option, sequence, string,
};
pub use crate::pipeline::Field;
