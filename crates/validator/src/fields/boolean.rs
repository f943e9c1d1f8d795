//! Boolean fields

use crate::foundation::codes;
use crate::pipeline::Field;

/// Creates a builder over a boolean.
pub fn boolean(target: &mut bool) -> Field<'_, bool> {
    Field::new(target)
}

impl Field<'_, bool> {
    /// The value must equal `expected`. Code `is`.
    pub fn is(self, expected: bool) -> Self {
        self.check(
            codes::IS,
            move |value| *value == expected,
            move |name| format!("{name} should be {expected}"),
        )
    }
}
