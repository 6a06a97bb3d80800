use std::fmt::{Display, Formatter};

/// Tag of an [`Optional`](crate::optional::Optional): whether a value is held or not.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Default, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Debug)]
#[repr(u8)]
pub enum Discriminant {
  #[default]
  Absent = 0,
  Present = 1,
}

impl Discriminant {
  #[inline]
  pub fn is_present(self) -> bool { self == Self::Present }
  #[inline]
  pub fn is_absent(self) -> bool { self == Self::Absent }
}

impl From<Discriminant> for u8 {
  #[inline]
  fn from(discriminant: Discriminant) -> Self { discriminant as u8 }
}
impl From<Discriminant> for bool {
  #[inline]
  fn from(discriminant: Discriminant) -> Self { discriminant.is_present() }
}
impl From<bool> for Discriminant {
  #[inline]
  fn from(present: bool) -> Self {
    if present { Self::Present } else { Self::Absent }
  }
}

impl Display for Discriminant {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    match self {
      Discriminant::Absent => f.write_str("Absent"),
      Discriminant::Present => f.write_str("Present"),
    }
  }
}
