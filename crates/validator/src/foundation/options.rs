//! Field configuration values
//!
//! [`FieldOptions`] bundles the pipeline switches so they can come from the
//! caller's own configuration layer; [`RefinementData`] relabels the error
//! produced by a failed refinement.

use serde::{Deserialize, Serialize};

// ============================================================================
// FIELD OPTIONS
// ============================================================================

/// Pipeline switches for a single field.
///
/// All fields default to off, matching a freshly constructed builder.
///
/// ```
/// use sift_validator::foundation::FieldOptions;
///
/// let options: FieldOptions = serde_json::from_str(r#"{ "abort_early": true }"#).unwrap();
/// assert!(options.abort_early);
/// assert!(!options.optional);
/// assert_eq!(options.required_error, None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldOptions {
    /// An absent value is not an error.
    pub optional: bool,

    /// Stop at the first failing action of this field.
    pub abort_early: bool,

    /// Message used instead of `"<name> is required"`.
    pub required_error: Option<String>,
}

impl FieldOptions {
    /// Creates options with everything switched off.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn abort_early(mut self) -> Self {
        self.abort_early = true;
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn required_error(mut self, message: impl Into<String>) -> Self {
        self.required_error = Some(message.into());
        self
    }
}

// ============================================================================
// REFINEMENT DATA
// ============================================================================

/// Overrides for the error produced by a failed refinement.
///
/// Empty strings keep the defaults: the owning field's name and the
/// `refinement` code.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RefinementData {
    /// Field label to report instead of the builder's name.
    pub field: String,

    /// Code to report instead of `refinement`.
    pub code: String,
}

impl RefinementData {
    /// Creates overrides for both the field label and the code.
    pub fn new(field: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            code: code.into(),
        }
    }

    /// Overrides only the field label.
    pub fn field(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            code: String::new(),
        }
    }

    /// Overrides only the code.
    pub fn code(code: impl Into<String>) -> Self {
        Self {
            field: String::new(),
            code: code.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_builder() {
        let options = FieldOptions::new()
            .optional()
            .abort_early()
            .required_error("missing");
        assert!(options.optional);
        assert!(options.abort_early);
        assert_eq!(options.required_error.as_deref(), Some("missing"));
    }

    #[test]
    fn options_deserialize_with_defaults() {
        let options: FieldOptions =
            serde_json::from_str(r#"{ "required_error": "name please" }"#).unwrap();
        assert_eq!(
            options,
            FieldOptions {
                optional: false,
                abort_early: false,
                required_error: Some("name please".into()),
            }
        );
    }

    #[test]
    fn refinement_data_constructors() {
        assert_eq!(RefinementData::field("confirm").code, "");
        assert_eq!(RefinementData::code("mismatch").field, "");
        let data = RefinementData::new("confirm", "mismatch");
        assert_eq!((data.field.as_str(), data.code.as_str()), ("confirm", "mismatch"));
    }
}
