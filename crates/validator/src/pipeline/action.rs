//! Pipeline actions
//!
//! A field's pipeline is an ordered list of [`Action`]s. The order they were
//! attached in is the order they run in; nothing reorders them.

use std::borrow::Cow;
use std::fmt;

use crate::foundation::{Evaluate, RefinementData, ValidationError, codes};

/// Produces nested field builders over the members of a record.
///
/// The projection runs once per evaluation, borrowing the record for as long
/// as the nested builders live.
pub(crate) type Projection<'a, T> =
    Box<dyn for<'r> Fn(&'r mut T) -> Vec<Box<dyn Evaluate + 'r>> + 'a>;

// ============================================================================
// ACTION
// ============================================================================

/// One step of a field pipeline.
pub(crate) enum Action<'a, T> {
    /// Built-in check with a fixed error code.
    Validation(Check<'a, T>),
    /// Caller predicate with a relabelable error.
    Refinement(Refinement<'a, T>),
    /// Rewrites the value for every later action and for the caller.
    Transform(Box<dyn FnMut(&mut T) + 'a>),
    /// Nested field builders projected from a record.
    Nested(Projection<'a, T>),
}

impl<T> Action<'_, T> {
    pub(crate) fn kind(&self) -> &'static str {
        match self {
            Action::Validation(_) => "validation",
            Action::Refinement(_) => "refinement",
            Action::Transform(_) => "transform",
            Action::Nested(_) => "nested",
        }
    }
}

impl<T> fmt::Debug for Action<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Validation(check) => f
                .debug_struct("Validation")
                .field("code", &check.code)
                .field("message", &check.message)
                .finish_non_exhaustive(),
            Action::Refinement(refinement) => f
                .debug_struct("Refinement")
                .field("data", &refinement.data)
                .field("message", &refinement.message)
                .finish_non_exhaustive(),
            Action::Transform(_) => f.write_str("Transform(<function>)"),
            Action::Nested(_) => f.write_str("Nested(<projection>)"),
        }
    }
}

// ============================================================================
// CHECK
// ============================================================================

/// A built-in check: a rule over the live value plus its error identity.
pub(crate) struct Check<'a, T> {
    pub(crate) code: &'static str,
    rule: Box<dyn Fn(&T) -> bool + 'a>,
    /// Builds the default message from the field's display name.
    describe: Box<dyn Fn(&str) -> String + 'a>,
    /// Caller message replacing the default.
    pub(crate) message: Option<Cow<'static, str>>,
}

impl<'a, T> Check<'a, T> {
    pub(crate) fn new<R, D>(code: &'static str, rule: R, describe: D) -> Self
    where
        R: Fn(&T) -> bool + 'a,
        D: Fn(&str) -> String + 'a,
    {
        Self {
            code,
            rule: Box::new(rule),
            describe: Box::new(describe),
            message: None,
        }
    }

    /// Runs the rule; on failure returns the error to report.
    pub(crate) fn run(&self, value: &T, name: &Cow<'static, str>) -> Option<ValidationError> {
        if (self.rule)(value) {
            return None;
        }

        let message = match &self.message {
            Some(message) => message.clone(),
            None => Cow::Owned((self.describe)(name.as_ref())),
        };

        Some(ValidationError {
            field: name.clone(),
            message,
            code: Cow::Borrowed(self.code),
        })
    }
}

// ============================================================================
// REFINEMENT
// ============================================================================

/// A caller predicate over the live value.
pub(crate) struct Refinement<'a, T> {
    predicate: Box<dyn Fn(&T) -> Result<(), String> + 'a>,
    pub(crate) data: RefinementData,
    pub(crate) message: Option<Cow<'static, str>>,
}

impl<'a, T> Refinement<'a, T> {
    pub(crate) fn new<F, M>(predicate: F, data: RefinementData) -> Self
    where
        F: Fn(&T) -> Result<(), M> + 'a,
        M: fmt::Display,
    {
        Self {
            predicate: Box::new(move |value: &T| predicate(value).map_err(|m| m.to_string())),
            data,
            message: None,
        }
    }

    /// Runs the predicate; on failure returns the error to report.
    ///
    /// The error defaults to `{field: name, code: "refinement"}`; non-empty
    /// entries of the refinement data replace those defaults.
    pub(crate) fn run(&self, value: &T, name: &Cow<'static, str>) -> Option<ValidationError> {
        let reason = (self.predicate)(value).err()?;

        let field = if self.data.field.is_empty() {
            name.clone()
        } else {
            Cow::Owned(self.data.field.clone())
        };
        let code = if self.data.code.is_empty() {
            Cow::Borrowed(codes::REFINEMENT)
        } else {
            Cow::Owned(self.data.code.clone())
        };
        let message = self.message.clone().unwrap_or(Cow::Owned(reason));

        Some(ValidationError {
            field,
            message,
            code,
        })
    }
}
