//! Numeric fields

use crate::foundation::{Number, codes};
use crate::pipeline::Field;

/// Creates a builder over any primitive integer or float.
pub fn number<N: Number>(target: &mut N) -> Field<'_, N> {
    Field::new(target)
}

impl<N: Number> Field<'_, N> {
    /// The value must be at least `bound` (inclusive). Code `min`.
    pub fn min(self, bound: N) -> Self {
        self.check(
            codes::MIN,
            move |value| *value >= bound,
            move |name| format!("{name} must be at least {bound}"),
        )
    }

    /// The value must be at most `bound` (inclusive). Code `max`.
    pub fn max(self, bound: N) -> Self {
        self.check(
            codes::MAX,
            move |value| *value <= bound,
            move |name| format!("{name} can be at most {bound}"),
        )
    }
}
