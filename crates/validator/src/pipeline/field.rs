//! The generic field builder and its evaluation loop

use std::borrow::Cow;
use std::fmt;

use tracing::trace;

use crate::foundation::{
    Evaluate, FieldOptions, RefinementData, ValidationError, ValidationErrors,
};
use crate::pipeline::action::{Action, Check, Projection, Refinement};

// ============================================================================
// FIELD
// ============================================================================

/// A value under validation together with its ordered pipeline.
///
/// The builder holds an exclusive borrow of the caller's value for as long as
/// it lives. Transforms write through that borrow, so their results are
/// visible to later actions and to the caller once the builder is dropped.
///
/// Kind-specific checks (`min`, `email`, `is`, ...) live in inherent impls
/// keyed on `T`; everything here applies to every kind.
///
/// # Examples
///
/// ```
/// use sift_validator::prelude::*;
///
/// let mut username = String::from("  Alice99 ");
///
/// let errors = string(&mut username)
///     .named("username")
///     .trim()
///     .to_lowercase()
///     .min(3)
///     .alpha_numeric()
///     .parse();
///
/// assert!(errors.is_empty());
/// assert_eq!(username, "alice99");
/// ```
#[must_use = "a field does nothing until it is parsed"]
pub struct Field<'a, T> {
    target: Option<&'a mut T>,
    name: Option<Cow<'static, str>>,
    options: FieldOptions,
    /// Record builders check the value's shape before running any action.
    shape: Option<fn(&T) -> bool>,
    actions: Vec<Action<'a, T>>,
}

impl<'a, T> Field<'a, T> {
    /// Creates a builder over a present value.
    pub fn new(target: &'a mut T) -> Self {
        Self::from_option(Some(target))
    }

    /// Creates a builder whose value was not provided.
    #[must_use]
    pub fn absent() -> Self {
        Self::from_option(None)
    }

    /// Creates a builder over a value that may be missing.
    pub fn from_option(target: Option<&'a mut T>) -> Self {
        Self {
            target,
            name: None,
            options: FieldOptions::default(),
            shape: None,
            actions: Vec::new(),
        }
    }

    pub(crate) fn with_shape(mut self, shape: fn(&T) -> bool) -> Self {
        self.shape = Some(shape);
        self
    }

    // ------------------------------------------------------------------------
    // Configuration
    // ------------------------------------------------------------------------

    /// Sets the display name used in messages and as the error field label.
    ///
    /// The first name wins: once a name is set, later calls are ignored.
    pub fn named(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        if self.name.is_none() {
            self.name = Some(name.into());
        }
        self
    }

    /// An absent value is not an error.
    pub fn optional(mut self) -> Self {
        self.options.optional = true;
        self
    }

    /// Stops this field at its first failing action.
    ///
    /// Sibling fields in a record are unaffected.
    pub fn abort_early(mut self) -> Self {
        self.options.abort_early = true;
        self
    }

    /// Replaces the generated `"<name> is required"` message.
    ///
    /// An empty message keeps the generated one.
    pub fn required_error(mut self, message: impl Into<String>) -> Self {
        self.options.required_error = Some(message.into());
        self
    }

    /// Applies a whole set of pipeline switches at once.
    pub fn with_options(mut self, options: FieldOptions) -> Self {
        self.options = options;
        self
    }

    /// Replaces the message of the most recently attached check or refinement.
    ///
    /// Has no effect when the last action is a transform or nested fields.
    pub fn with_message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        match self.actions.last_mut() {
            Some(Action::Validation(check)) => check.message = Some(message.into()),
            Some(Action::Refinement(refinement)) => refinement.message = Some(message.into()),
            _ => {}
        }
        self
    }

    // ------------------------------------------------------------------------
    // Actions shared by every kind
    // ------------------------------------------------------------------------

    /// Attaches a custom predicate over the live value.
    ///
    /// A failure reports code `refinement` under the field's name, with the
    /// predicate's error as the message.
    pub fn refine<F, M>(self, predicate: F) -> Self
    where
        F: Fn(&T) -> Result<(), M> + 'a,
        M: fmt::Display,
    {
        self.refine_with(predicate, RefinementData::default())
    }

    /// Like [`refine`](Self::refine), relabeling the error with `data`.
    pub fn refine_with<F, M>(mut self, predicate: F, data: RefinementData) -> Self
    where
        F: Fn(&T) -> Result<(), M> + 'a,
        M: fmt::Display,
    {
        self.actions
            .push(Action::Refinement(Refinement::new(predicate, data)));
        self
    }

    /// Replaces the value with `f(&value)`.
    pub fn transform<F>(mut self, f: F) -> Self
    where
        F: Fn(&T) -> T + 'a,
    {
        self.actions
            .push(Action::Transform(Box::new(move |value: &mut T| {
                *value = f(&*value);
            })));
        self
    }

    /// Mutates the value in place, e.g. sorting or deduplicating a collection.
    pub fn transform_in_place<F>(mut self, f: F) -> Self
    where
        F: FnMut(&mut T) + 'a,
    {
        self.actions.push(Action::Transform(Box::new(f)));
        self
    }

    pub(crate) fn check<R, D>(mut self, code: &'static str, rule: R, describe: D) -> Self
    where
        R: Fn(&T) -> bool + 'a,
        D: Fn(&str) -> String + 'a,
    {
        self.actions
            .push(Action::Validation(Check::new(code, rule, describe)));
        self
    }

    pub(crate) fn nest(mut self, projection: Projection<'a, T>) -> Self {
        self.actions.push(Action::Nested(projection));
        self
    }

    // ------------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------------

    /// The display name, empty if none was set.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    /// The pipeline switches currently in effect.
    #[must_use]
    pub fn options(&self) -> &FieldOptions {
        &self.options
    }

    /// Whether a value was provided.
    #[must_use]
    pub fn is_present(&self) -> bool {
        self.target.is_some()
    }

    /// Number of attached actions.
    #[must_use]
    pub fn action_count(&self) -> usize {
        self.actions.len()
    }

    // ------------------------------------------------------------------------
    // Terminal operations
    // ------------------------------------------------------------------------

    /// Boxes the builder for use in heterogeneous lists of fields.
    pub fn boxed(self) -> Box<dyn Evaluate + 'a>
    where
        T: 'a,
    {
        Box::new(self)
    }

    /// Runs the pipeline and returns every error, in evaluation order.
    ///
    /// Returns an empty vector when the value is valid. Calling it again
    /// re-runs every action, transforms included.
    pub fn parse(&mut self) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        self.evaluate(&mut errors);
        errors
    }

    /// Runs the pipeline, returning `Err` if anything failed.
    pub fn validate(&mut self) -> Result<(), ValidationErrors> {
        ValidationErrors::from(self.parse()).into_result(())
    }
}

// ============================================================================
// EVALUATION
// ============================================================================

impl<T> Evaluate for Field<'_, T> {
    fn evaluate(&mut self, errors: &mut Vec<ValidationError>) -> bool {
        let name = self.name.clone().unwrap_or(Cow::Borrowed(""));
        let abort_early = self.options.abort_early;

        let Some(value) = self.target.as_deref_mut() else {
            if self.options.optional {
                trace!(field = %name, "optional field absent, skipping");
                return true;
            }
            trace!(field = %name, "required field absent");
            errors.push(ValidationError::required(
                name,
                self.options.required_error.as_deref(),
            ));
            return false;
        };

        if let Some(is_record) = self.shape {
            if !is_record(value) {
                trace!(field = %name, "value is not a record");
                errors.push(ValidationError::invalid_type(name));
                return false;
            }
        }

        trace!(field = %name, actions = self.actions.len(), abort_early, "evaluating field");
        let reported_before = errors.len();
        let mut passed = true;

        for action in &mut self.actions {
            let action_passed = match action {
                Action::Validation(check) => match check.run(value, &name) {
                    Some(error) => {
                        errors.push(error);
                        false
                    }
                    None => true,
                },
                Action::Refinement(refinement) => match refinement.run(value, &name) {
                    Some(error) => {
                        errors.push(error);
                        false
                    }
                    None => true,
                },
                Action::Transform(apply) => {
                    apply(&mut *value);
                    continue;
                }
                Action::Nested(project) => {
                    let mut nested_passed = true;
                    for mut field in project(&mut *value) {
                        if !field.evaluate(errors) {
                            nested_passed = false;
                            if abort_early {
                                break;
                            }
                        }
                    }
                    nested_passed
                }
            };

            if !action_passed {
                passed = false;
                if abort_early {
                    trace!(field = %name, action = action.kind(), "aborting early");
                    break;
                }
            }
        }

        trace!(
            field = %name,
            passed,
            errors = errors.len() - reported_before,
            "field evaluated"
        );
        passed
    }
}

impl<T> fmt::Debug for Field<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name())
            .field("present", &self.is_present())
            .field("options", &self.options)
            .field("actions", &self.actions)
            .finish()
    }
}

// ============================================================================
// TESTS
// ============================================================================
