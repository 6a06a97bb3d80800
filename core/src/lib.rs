//! An optional value with an explicit presence tag and opt-in failure on extraction.

pub mod util;
pub mod error;
pub mod discriminant;
pub mod optional;
pub mod builder;

pub use builder::{Absent, Present};
pub use discriminant::Discriminant;
pub use error::OptionalError;
pub use optional::{BoxDeferred, Deferred, Optional};
