//! The action pipeline shared by every field kind
//!
//! A [`Field`] owns an ordered list of actions and runs them in a single
//! linear pass:
//!
//! 1. A missing value yields one `required` error, or nothing at all if the
//!    field is optional. No action runs in either case.
//! 2. Otherwise each action runs in declaration order. Checks and refinements
//!    read the *live* value, so a transform attached earlier is always
//!    observed by the actions after it.
//! 3. A failing action marks the field failed. With abort-early the pass stops
//!    there; without it every remaining action still runs.
//!
//! The loop is written once, generically; the per-kind modules in
//! [`fields`](crate::fields) only attach checks.

mod action;
mod field;

pub use field::Field;
