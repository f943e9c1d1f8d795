//! Ordered-sequence fields
//!
//! Bounds are measured by element count. Element values are not inspected;
//! use `refine` for that.

use std::collections::VecDeque;

use crate::foundation::{Sequence, codes};
use crate::pipeline::Field;

/// Creates a builder over a `Vec` or `VecDeque`.
pub fn sequence<S: Sequence>(target: &mut S) -> Field<'_, S> {
    Field::new(target)
}

macro_rules! sequence_checks {
    ($($seq:ident),+ $(,)?) => {
        $(
            impl<T> Field<'_, $seq<T>> {
                /// At least `count` elements. Code `min`.
                pub fn min(self, count: usize) -> Self {
                    self.check(
                        codes::MIN,
                        move |value| value.element_count() >= count,
                        move |name| format!("{name} must have at least {count} items"),
                    )
                }

                /// At most `count` elements. Code `max`.
                pub fn max(self, count: usize) -> Self {
                    self.check(
                        codes::MAX,
                        move |value| value.element_count() <= count,
                        move |name| format!("{name} must have at most {count} items"),
                    )
                }

                /// Exactly `count` elements. Code `length`.
                pub fn length(self, count: usize) -> Self {
                    self.check(
                        codes::LENGTH,
                        move |value| value.element_count() == count,
                        move |name| format!("{name} must have {count} items"),
                    )
                }
            }
        )+
    };
}

sequence_checks!(Vec, VecDeque);
