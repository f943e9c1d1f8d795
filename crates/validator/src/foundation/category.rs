//! Sealed value categories
//!
//! Kind-specific checks are inherent methods on [`Field`](crate::pipeline::Field)
//! selected by the value type. These sealed traits group the value types that
//! share a set of checks:
//!
//! - [`Number`] - primitive integers and floats (`min`, `max`)
//! - [`Sequence`] - ordered collections measured by element count
//! - [`Mapping`] - keyed collections measured by entry count
//!
//! `Number` is sealed so that no type outside this crate can join it; that is
//! what lets `Field<'_, u8>`, `Field<'_, String>` and `Field<'_, Vec<T>>` each
//! carry their own `min` without the inherent impls overlapping.

use std::collections::{BTreeMap, HashMap, VecDeque};
use std::fmt::Display;
use std::hash::BuildHasher;

mod sealed {
    pub trait Sealed {}
}

// ============================================================================
// NUMBER
// ============================================================================

/// Primitive numeric types accepted by numeric fields.
///
/// This trait is sealed and cannot be implemented outside this crate.
pub trait Number: PartialOrd + Copy + Display + sealed::Sealed {}

macro_rules! impl_number {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}
            impl Number for $ty {}
        )+
    };
}

impl_number!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64
);

// ============================================================================
// SEQUENCE
// ============================================================================

/// Ordered collections whose size is their element count.
///
/// This trait is sealed and cannot be implemented outside this crate.
pub trait Sequence: sealed::Sealed {
    /// Number of elements.
    fn element_count(&self) -> usize;
}

impl<T> sealed::Sealed for Vec<T> {}

impl<T> Sequence for Vec<T> {
    fn element_count(&self) -> usize {
        self.len()
    }
}

impl<T> sealed::Sealed for VecDeque<T> {}

impl<T> Sequence for VecDeque<T> {
    fn element_count(&self) -> usize {
        self.len()
    }
}

// ============================================================================
// MAPPING
// ============================================================================

/// Keyed collections whose size is their entry count.
///
/// This trait is sealed and cannot be implemented outside this crate.
pub trait Mapping: sealed::Sealed {
    /// Number of key/value entries.
    fn entry_count(&self) -> usize;
}

impl<K, V, S: BuildHasher> sealed::Sealed for HashMap<K, V, S> {}

impl<K, V, S: BuildHasher> Mapping for HashMap<K, V, S> {
    fn entry_count(&self) -> usize {
        self.len()
    }
}

impl<K, V> sealed::Sealed for BTreeMap<K, V> {}

impl<K, V> Mapping for BTreeMap<K, V> {
    fn entry_count(&self) -> usize {
        self.len()
    }
}
