//! Error types produced by field evaluation
//!
//! Every failed action contributes exactly one [`ValidationError`]. Errors are
//! plain data: evaluation never panics or aborts on invalid input, it appends
//! to the error list and moves on (unless the field asked to abort early).
//!
//! All string fields use `Cow<'static, str>` so the static error codes in
//! [`codes`] never allocate.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

// ============================================================================
// ERROR CODES
// ============================================================================

/// Stable error codes attached to every [`ValidationError`].
///
/// Codes are meant for programmatic handling; messages are for humans.
pub mod codes {
    /// A non-optional field had no value.
    pub const REQUIRED: &str = "required";
    /// A record builder was pointed at something that is not a record.
    pub const INVALID_TYPE: &str = "invalid-type";
    /// A caller-supplied refinement rejected the value.
    pub const REFINEMENT: &str = "refinement";
    pub const MIN: &str = "min";
    pub const MAX: &str = "max";
    pub const LENGTH: &str = "length";
    pub const CONTAINS: &str = "contains";
    pub const STARTS_WITH: &str = "starts-with";
    pub const ENDS_WITH: &str = "ends-with";
    pub const ALPHA: &str = "alpha";
    pub const NUMERIC: &str = "numeric";
    pub const ALPHA_NUMERIC: &str = "alpha-numeric";
    pub const EMAIL: &str = "email";
    pub const UUID: &str = "uuid";
    pub const URL: &str = "url";
    pub const IS_ONE_OF: &str = "is-one-of";
    pub const IS: &str = "is";
}

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A single validation failure.
///
/// # Examples
///
/// ```
/// use sift_validator::foundation::{ValidationError, codes};
///
/// let error = ValidationError::new("age", "age must be at least 18", codes::MIN);
/// assert_eq!(error.to_string(), "[age] min: age must be at least 18");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, thiserror::Error)]
#[error("[{field}] {code}: {message}")]
pub struct ValidationError {
    /// Label of the field that failed; defaults to the builder's display name.
    pub field: Cow<'static, str>,

    /// Human-readable message.
    pub message: Cow<'static, str>,

    /// Error code for programmatic handling, see [`codes`].
    pub code: Cow<'static, str>,
}

impl ValidationError {
    /// Creates an error from its three parts.
    pub fn new(
        field: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
        code: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            code: code.into(),
        }
    }

    /// Creates the error reported when a non-optional field has no value.
    ///
    /// `override_message` replaces the generated `"<field> is required"` text.
    /// An empty override counts as no override.
    pub fn required(field: impl Into<Cow<'static, str>>, override_message: Option<&str>) -> Self {
        let field = field.into();
        let message = match override_message.filter(|message| !message.is_empty()) {
            Some(message) => Cow::Owned(message.to_owned()),
            None => Cow::Owned(format!("{field} is required")),
        };

        Self {
            field,
            message,
            code: Cow::Borrowed(codes::REQUIRED),
        }
    }

    /// Creates the error reported when a record builder targets a non-record value.
    ///
    /// The message names the field (`"<field> must be a struct"`) so nested
    /// records can be told apart; an unnamed record reports
    /// `"value must be a struct"`.
    pub fn invalid_type(field: impl Into<Cow<'static, str>>) -> Self {
        let field = field.into();
        let message = if field.is_empty() {
            Cow::Borrowed("value must be a struct")
        } else {
            Cow::Owned(format!("{field} must be a struct"))
        };

        Self {
            field,
            message,
            code: Cow::Borrowed(codes::INVALID_TYPE),
        }
    }

    /// Returns true if this error carries the given code.
    #[must_use]
    pub fn has_code(&self, code: &str) -> bool {
        self.code == code
    }
}

// ============================================================================
// ERROR COLLECTION
// ============================================================================

/// An ordered collection of validation errors.
///
/// Returned by [`Field::validate`](crate::pipeline::Field::validate) for callers
/// that prefer `?` over inspecting a vector.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("validation failed with {} error(s)", .errors.len())]
#[serde(transparent)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    /// Creates a new empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Adds an error to the collection.
    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Returns the number of errors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns true if there are no errors.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns all errors in evaluation order.
    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Iterates over the errors in evaluation order.
    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.errors.iter()
    }

    /// Returns the errors reported for one field label.
    pub fn for_field<'s>(&'s self, field: &'s str) -> impl Iterator<Item = &'s ValidationError> {
        self.errors.iter().filter(move |e| e.field == field)
    }

    /// Returns the error codes in evaluation order.
    #[must_use]
    pub fn codes(&self) -> Vec<&str> {
        self.errors.iter().map(|e| e.code.as_ref()).collect()
    }

    /// Consumes the collection and returns the inner vector.
    #[must_use]
    pub fn into_vec(self) -> Vec<ValidationError> {
        self.errors
    }

    /// `Ok(ok_value)` when empty, `Err(self)` otherwise.
    pub fn into_result<T>(self, ok_value: T) -> Result<T, ValidationErrors> {
        if self.is_empty() {
            Ok(ok_value)
        } else {
            Err(self)
        }
    }
}

impl From<Vec<ValidationError>> for ValidationErrors {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self { errors }
    }
}

impl FromIterator<ValidationError> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = ValidationError>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'s> IntoIterator for &'s ValidationErrors {
    type Item = &'s ValidationError;
    type IntoIter = std::slice::Iter<'s, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

// ============================================================================
// TESTS
// ============================================================================
