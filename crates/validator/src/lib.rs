//! # sift-validator
//!
//! A declarative, composable validation engine for in-memory values.
//!
//! Each value gets a [`Field`](pipeline::Field) builder that holds an ordered
//! pipeline of checks, refinements and transforms. Records compose member
//! fields, to any depth, and report every failure in declaration order.
//!
//! ## Quick Start
//!
//! ```rust
//! use sift_validator::prelude::*;
//!
//! struct SignUp {
//!     username: String,
//!     age: u8,
//!     accepted_terms: bool,
//! }
//!
//! sift_validator::record!(SignUp);
//!
//! let mut form = SignUp {
//!     username: " aadi@23 ".into(),
//!     age: 15,
//!     accepted_terms: true,
//! };
//!
//! let errors = record(&mut form)
//!     .named("form")
//!     .fields(|form| {
//!         vec![
//!             string(&mut form.username)
//!                 .named("username")
//!                 .trim()
//!                 .alpha_numeric()
//!                 .boxed(),
//!             number(&mut form.age).named("age").min(18).boxed(),
//!             boolean(&mut form.accepted_terms).named("terms").is(true).boxed(),
//!         ]
//!     })
//!     .parse();
//!
//! let codes: Vec<_> = errors.iter().map(|e| e.code.as_ref()).collect();
//! assert_eq!(codes, ["alpha-numeric", "min"]);
//! assert_eq!(form.username, "aadi@23");
//! ```
//!
//! ## Field Kinds
//!
//! - **Boolean**: [`boolean`](fields::boolean) with `is`
//! - **Numeric**: [`number`](fields::number) with `min`, `max`
//! - **String**: [`string`](fields::string) with length, content and shape
//!   checks plus `trim` and `to_lowercase`
//! - **Sequence**: [`sequence`](fields::sequence) with `min`, `max`, `length`
//! - **Mapping**: [`mapping`](fields::mapping) with `min`, `max`
//! - **Record**: [`record`](fields::record) with `fields`
//!
//! Every kind also supports `refine`, `transform`, `optional`, `abort_early`
//! and `with_message`.
//!
//! ## Features
//!
//! - `json` (default): validate `serde_json::Value` objects as records, see
//!   [`json`].

pub mod fields;
pub mod foundation;
#[cfg(feature = "json")]
pub mod json;
mod macros;
pub mod pipeline;
pub mod prelude;
