//! Keyed-mapping fields
//!
//! Bounds are measured by entry count.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use crate::foundation::{Mapping, codes};
use crate::pipeline::Field;

/// Creates a builder over a `HashMap` or `BTreeMap`.
pub fn mapping<M: Mapping>(target: &mut M) -> Field<'_, M> {
    Field::new(target)
}

macro_rules! mapping_checks {
    ($(impl<$($gen:ident $(: $bound:path)?),*> $map:ty;)+) => {
        $(
            impl<$($gen $(: $bound)?),*> Field<'_, $map> {
                /// At least `count` entries. Code `min`.
                pub fn min(self, count: usize) -> Self {
                    self.check(
                        codes::MIN,
                        move |value| value.entry_count() >= count,
                        move |name| format!("{name} should have at least {count} entries"),
                    )
                }

                /// At most `count` entries. Code `max`.
                pub fn max(self, count: usize) -> Self {
                    self.check(
                        codes::MAX,
                        move |value| value.entry_count() <= count,
                        move |name| format!("{name} can have at most {count} entries"),
                    )
                }
            }
        )+
    };
}

mapping_checks! {
    impl<K, V, S: BuildHasher> HashMap<K, V, S>;
    impl<K, V> BTreeMap<K, V>;
}
