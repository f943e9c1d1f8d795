//! Typed field constructors and kind-specific checks
//!
//! Each constructor returns a [`Field`](crate::pipeline::Field) over the
//! caller's value. Checks only exist on the kinds they make sense for:
//!
//! | Constructor  | Target                         | Checks                                  |
//! |--------------|--------------------------------|-----------------------------------------|
//! | [`boolean`]  | `bool`                         | `is`                                    |
//! | [`number`]   | any primitive int or float     | `min`, `max`                            |
//! | [`string`]   | `String`                       | length, content, shape, `trim`, ...     |
//! | [`sequence`] | `Vec<T>`, `VecDeque<T>`        | `min`, `max`, `length`                  |
//! | [`mapping`]  | `HashMap<K, V>`, `BTreeMap<K, V>` | `min`, `max`                         |
//! | [`record`]   | any [`Record`](crate::foundation::Record) | `fields`                     |

mod boolean;
mod mapping;
mod number;
pub(crate) mod patterns;
mod record;
mod sequence;
mod string;

pub use boolean::boolean;
pub use mapping::mapping;
pub use number::number;
pub use record::{record, record_from_option};
pub use sequence::sequence;
pub use string::string;
