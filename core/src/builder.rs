//! Construction helpers that turn into an [`Optional`] at the call site through `From`/`Into`, so code can write
//! `return Present(value).into()` without naming the optional type.

use crate::optional::Optional;

/// Builds a present [`Optional`] holding the wrapped value.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Present<T>(pub T);

/// Builds an absent [`Optional`] of any value type.
#[derive(Default, Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Absent;

impl<T> From<Present<T>> for Optional<T> {
  #[inline]
  fn from(present: Present<T>) -> Self { Optional::from_value(present.0) }
}

impl<T> From<Absent> for Optional<T> {
  #[inline]
  fn from(_: Absent) -> Self { Optional::empty() }
}
