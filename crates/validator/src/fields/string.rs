//! String fields
//!
//! Length checks count Unicode scalar values, not bytes. Shape checks
//! (`alpha`, `email`, `uuid`, ...) match against pre-compiled patterns.

use regex::Regex;
use std::sync::LazyLock;

use crate::fields::patterns;
use crate::foundation::codes;
use crate::pipeline::Field;

/// Creates a builder over a string.
pub fn string(target: &mut String) -> Field<'_, String> {
    Field::new(target)
}

fn char_count(value: &str) -> usize {
    value.chars().count()
}

impl Field<'_, String> {
    // ------------------------------------------------------------------------
    // Length
    // ------------------------------------------------------------------------

    /// At least `length` characters. Code `min`.
    ///
    /// Counts `char`s, not bytes: `"héé"` has length 3.
    pub fn min(self, length: usize) -> Self {
        self.check(
            codes::MIN,
            move |value| char_count(value) >= length,
            move |name| format!("{name} should have at least {length} characters"),
        )
    }

    /// At most `length` characters. Code `max`.
    ///
    /// Counts `char`s, not bytes: `"héé"` has length 3.
    pub fn max(self, length: usize) -> Self {
        self.check(
            codes::MAX,
            move |value| char_count(value) <= length,
            move |name| format!("{name} can have at most {length} characters"),
        )
    }

    /// Exactly `length` characters. Code `length`.
    ///
    /// Counts `char`s, not bytes: `"héé"` has length 3.
    pub fn length(self, length: usize) -> Self {
        self.check(
            codes::LENGTH,
            move |value| char_count(value) == length,
            move |name| format!("{name} should have {length} characters"),
        )
    }

    // ------------------------------------------------------------------------
    // Content
    // ------------------------------------------------------------------------

    /// Must contain `needle`. Code `contains`.
    pub fn contains(self, needle: impl Into<String>) -> Self {
        let needle = needle.into();
        let shown = needle.clone();
        self.check(
            codes::CONTAINS,
            move |value| value.contains(needle.as_str()),
            move |name| format!("{name} should contain {shown}"),
        )
    }

    /// Must start with `prefix`. Code `starts-with`.
    pub fn starts_with(self, prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        let shown = prefix.clone();
        self.check(
            codes::STARTS_WITH,
            move |value| value.starts_with(prefix.as_str()),
            move |name| format!("{name} does not start with {shown}"),
        )
    }

    /// Must end with `suffix`. Code `ends-with`.
    pub fn ends_with(self, suffix: impl Into<String>) -> Self {
        let suffix = suffix.into();
        let shown = suffix.clone();
        self.check(
            codes::ENDS_WITH,
            move |value| value.ends_with(suffix.as_str()),
            move |name| format!("{name} does not end with {shown}"),
        )
    }

    /// Must equal one of `allowed`. Code `is-one-of`.
    ///
    /// An empty list rejects every value.
    pub fn is_one_of<I, S>(self, allowed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let allowed: Vec<String> = allowed.into_iter().map(Into::into).collect();
        let shown = allowed.join(", ");
        self.check(
            codes::IS_ONE_OF,
            move |value| allowed.iter().any(|candidate| candidate == value),
            move |name| format!("{name} can only be {shown}"),
        )
    }

    // ------------------------------------------------------------------------
    // Shape
    // ------------------------------------------------------------------------

    fn pattern(
        self,
        code: &'static str,
        pattern: &'static LazyLock<Regex>,
        describe: fn(&str) -> String,
    ) -> Self {
        self.check(code, move |value| pattern.is_match(value), describe)
    }

    /// ASCII letters only. Code `alpha`.
    pub fn alpha(self) -> Self {
        self.pattern(codes::ALPHA, &patterns::ALPHA, |name| {
            format!("{name} should contain only alphabets")
        })
    }

    /// ASCII digits only. Code `numeric`.
    pub fn numeric(self) -> Self {
        self.pattern(codes::NUMERIC, &patterns::NUMERIC, |name| {
            format!("{name} should contain only numbers")
        })
    }

    /// ASCII letters and digits only. Code `alpha-numeric`.
    pub fn alpha_numeric(self) -> Self {
        self.pattern(codes::ALPHA_NUMERIC, &patterns::ALPHA_NUMERIC, |name| {
            format!("{name} should contain only alphabets and numbers")
        })
    }

    /// Syntactically an email address. Code `email`.
    pub fn email(self) -> Self {
        self.pattern(codes::EMAIL, &patterns::EMAIL, |name| {
            format!("{name} is not a valid email")
        })
    }

    /// Hyphenated hexadecimal UUID. Code `uuid`.
    pub fn uuid(self) -> Self {
        self.pattern(codes::UUID, &patterns::UUID, |name| {
            format!("{name} is not a valid UUID")
        })
    }

    /// An `http` or `https` URL. Code `url`.
    pub fn url(self) -> Self {
        self.pattern(codes::URL, &patterns::URL, |name| {
            format!("{name} is not a valid URL")
        })
    }

    // ------------------------------------------------------------------------
    // Transforms
    // ------------------------------------------------------------------------

    /// Strips leading and trailing whitespace.
    pub fn trim(self) -> Self {
        self.transform(|value| value.trim().to_owned())
    }

    /// Lowercases the value.
    pub fn to_lowercase(self) -> Self {
        self.transform(|value| value.to_lowercase())
    }
}
