use futures::future::{ready, Ready};

use crate::discriminant::Discriminant;
use crate::error::OptionalError;
use crate::util::maybe_send::{MaybeSend, MaybeSendBoxFuture, MaybeSendFuture};

/// Zero or one value of type `T`.
///
/// Every instance is constructed in its final state, either with [`Optional::from_value`] or [`Optional::empty`],
/// and is never changed afterwards. The absent variant carries no payload, so the stored value can only be observed
/// when it exists.
///
/// Extraction follows an opt-in failure contract: [`unwrap`](Optional::unwrap) returns the default value of `T` for
/// an absent optional, unless the caller passes `throw_if_absent = true`, in which case it fails with
/// [`OptionalError::InvalidState`].
///
/// Coercions to `bool`, integers, and [`Discriminant`] are explicit: use the `as_*` methods or the `From<&Optional<T>>`
/// impls (`let present: bool = (&optional).into();`).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Optional<T> {
  Absent,
  Present(T),
}

/// Immediately ready result of [`Optional::unwrap_deferred`].
pub type Deferred<T> = Ready<Result<T, OptionalError>>;
/// Boxed result of [`Optional::unwrap_deferred_boxed`]; `Send` on native platforms.
pub type BoxDeferred<'a, T> = MaybeSendBoxFuture<'a, Result<T, OptionalError>>;

impl<T> Optional<T> {
  /// Creates a present optional holding `value`.
  #[inline]
  pub fn from_value(value: T) -> Self { Self::Present(value) }

  /// Creates an absent optional.
  #[inline]
  pub fn empty() -> Self { Self::Absent }


  #[inline]
  pub fn discriminant(&self) -> Discriminant {
    match self {
      Self::Absent => Discriminant::Absent,
      Self::Present(_) => Discriminant::Present,
    }
  }

  #[inline]
  pub fn is_present(&self) -> bool { matches!(self, Self::Present(_)) }

  #[inline]
  pub fn is_absent(&self) -> bool { matches!(self, Self::Absent) }

  /// Gets a reference to the value if present.
  #[inline]
  pub fn get(&self) -> Option<&T> {
    match self {
      Self::Absent => None,
      Self::Present(value) => Some(value),
    }
  }

  #[inline]
  pub fn into_option(self) -> Option<T> {
    match self {
      Self::Absent => None,
      Self::Present(value) => Some(value),
    }
  }


  /// Returns a copy of the stored value if present. If absent, returns `T::default()`, or fails with
  /// [`OptionalError::InvalidState`] when `throw_if_absent` is `true`.
  ///
  /// Does not change `self`; calling it repeatedly gives the same result.
  pub fn unwrap(&self, throw_if_absent: bool) -> Result<T, OptionalError> where
    T: Clone + Default
  {
    match self {
      Self::Present(value) => Ok(value.clone()),
      Self::Absent => absent_fallback(throw_if_absent),
    }
  }

  /// Consuming version of [`unwrap`](Self::unwrap), which moves the value out instead of cloning it.
  pub fn into_unwrap(self, throw_if_absent: bool) -> Result<T, OptionalError> where
    T: Default
  {
    match self {
      Self::Present(value) => Ok(value),
      Self::Absent => absent_fallback(throw_if_absent),
    }
  }

  /// Same as `unwrap(false)`.
  #[inline]
  pub fn unwrap_or_default(&self) -> T where
    T: Clone + Default
  {
    self.get().cloned().unwrap_or_default()
  }

  /// Returns a copy of the stored value, or fails with [`OptionalError::InvalidState`] if absent. Unlike
  /// [`unwrap`](Self::unwrap), `T` does not need a default value.
  pub fn try_unwrap(&self) -> Result<T, OptionalError> where
    T: Clone
  {
    match self {
      Self::Present(value) => Ok(value.clone()),
      Self::Absent => {
        tracing::debug!(throw_if_absent = true, "unwrap called on an absent optional");
        Err(OptionalError::InvalidState)
      }
    }
  }


  /// Same as [`unwrap`](Self::unwrap), but hands the outcome back through a future for callers that are already in
  /// an async context. The future is ready immediately: it never suspends and needs no runtime to complete.
  #[inline]
  pub fn unwrap_deferred(&self, throw_if_absent: bool) -> Deferred<T> where
    T: Clone + Default
  {
    ready(self.unwrap(throw_if_absent))
  }

  /// Same as [`unwrap_deferred`](Self::unwrap_deferred), boxed into a trait object.
  #[inline]
  pub fn unwrap_deferred_boxed<'a>(&self, throw_if_absent: bool) -> BoxDeferred<'a, T> where
    T: Clone + Default + MaybeSend + 'a
  {
    self.unwrap_deferred(throw_if_absent).boxed_maybe_send()
  }


  /// Coerces into `bool`: `true` when present, `false` when absent.
  #[inline]
  pub fn as_bool(&self) -> bool { self.is_present() }

  #[inline]
  pub fn as_discriminant(&self) -> Discriminant { self.discriminant() }
}

fn absent_fallback<T: Default>(throw_if_absent: bool) -> Result<T, OptionalError> {
  if throw_if_absent {
    tracing::debug!(throw_if_absent, "unwrap called on an absent optional");
    Err(OptionalError::InvalidState)
  } else {
    tracing::trace!("unwrap called on an absent optional; returning default value");
    Ok(T::default())
  }
}

macro_rules! impl_numeric_coercions {
  ($($method:ident => $ty:ty),* $(,)?) => {
    impl<T> Optional<T> {
      $(
        #[doc = concat!("Coerces into `", stringify!($ty), "`: `1` when present, `0` when absent.")]
        #[inline]
        pub fn $method(&self) -> $ty {
          if self.is_present() { 1 } else { 0 }
        }
      )*
    }

    $(
      impl<T> From<&Optional<T>> for $ty {
        #[inline]
        fn from(optional: &Optional<T>) -> Self { optional.$method() }
      }
    )*
  };
}

impl_numeric_coercions!(
  as_u8 => u8,
  as_i8 => i8,
  as_u32 => u32,
  as_i32 => i32,
);

impl<T> Default for Optional<T> {
  #[inline]
  fn default() -> Self { Self::Absent }
}

impl<T> From<&Optional<T>> for bool {
  #[inline]
  fn from(optional: &Optional<T>) -> Self { optional.as_bool() }
}
impl<T> From<&Optional<T>> for Discriminant {
  #[inline]
  fn from(optional: &Optional<T>) -> Self { optional.as_discriminant() }
}

impl<T> From<Option<T>> for Optional<T> {
  #[inline]
  fn from(option: Option<T>) -> Self {
    match option {
      Some(value) => Self::Present(value),
      None => Self::Absent,
    }
  }
}
impl<T> From<Optional<T>> for Option<T> {
  #[inline]
  fn from(optional: Optional<T>) -> Self { optional.into_option() }
}

// Serialized exactly like `Option<T>`.
#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Optional<T> {
  fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serde::Serialize::serialize(&self.get(), serializer)
  }
}
#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for Optional<T> {
  fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    <Option<T> as serde::Deserialize<'de>>::deserialize(deserializer).map(Self::from)
  }
}


#[cfg(test)]
mod tests {
  use futures::FutureExt;

  use super::*;

  #[test]
  fn present_unwraps_to_value() {
    let optional = Optional::from_value(42);
    assert_eq!(optional.discriminant(), Discriminant::Present);
    assert_eq!(optional.unwrap(false), Ok(42));
    assert_eq!(optional.unwrap(true), Ok(42));
    assert!(optional.as_bool());
    assert_eq!(optional.as_i32(), 1);
  }

  #[test]
  fn absent_unwraps_to_default_or_fails() {
    let optional = Optional::<i32>::empty();
    assert_eq!(optional.discriminant(), Discriminant::Absent);
    assert_eq!(optional.unwrap(false), Ok(0));
    assert_eq!(optional.unwrap(true), Err(OptionalError::InvalidState));
    assert!(!optional.as_bool());
  }

  #[test]
  fn absent_string_defaults_to_empty() {
    let optional = Optional::<String>::empty();
    assert_eq!(optional.unwrap(false).as_deref(), Ok(""));
    assert_eq!(optional.unwrap_or_default(), "");
  }

  #[test]
  fn presence_is_independent_of_payload() {
    let optional = Optional::from_value(None::<u8>);
    assert!(optional.is_present());
    assert_eq!(optional.unwrap(true), Ok(None));
  }

  #[test]
  fn numeric_coercions_agree() {
    let present = Optional::from_value('x');
    assert_eq!((present.as_u8(), present.as_i8(), present.as_u32(), present.as_i32()), (1, 1, 1, 1));
    let absent = Optional::<char>::empty();
    assert_eq!((absent.as_u8(), absent.as_i8(), absent.as_u32(), absent.as_i32()), (0, 0, 0, 0));
  }

  #[test]
  fn from_impls_match_methods() {
    let optional = Optional::from_value(1.5f64);
    let present: bool = (&optional).into();
    let byte: u8 = (&optional).into();
    let signed: i8 = (&optional).into();
    let unsigned: u32 = (&optional).into();
    let int: i32 = (&optional).into();
    let discriminant: Discriminant = (&optional).into();
    assert!(present);
    assert_eq!((byte, signed, unsigned, int), (1, 1, 1, 1));
    assert_eq!(discriminant, Discriminant::Present);
    assert_eq!(u8::from(discriminant), byte);
  }

  #[test]
  fn reading_does_not_change_instance() {
    let optional = Optional::from_value(vec![1, 2, 3]);
    let first = optional.unwrap(true);
    let second = optional.unwrap(true);
    assert_eq!(first, second);
    assert_eq!(optional.as_bool(), optional.as_bool());
    assert_eq!(optional, Optional::from_value(vec![1, 2, 3]));
  }

  #[test]
  fn into_unwrap_moves_value() {
    assert_eq!(Optional::from_value(String::from("owned")).into_unwrap(true).as_deref(), Ok("owned"));
    assert_eq!(Optional::<String>::empty().into_unwrap(false).as_deref(), Ok(""));
    assert_eq!(Optional::<String>::empty().into_unwrap(true), Err(OptionalError::InvalidState));
  }

  #[test]
  fn try_unwrap_without_default() {
    #[derive(Clone, Debug, PartialEq)]
    struct NoDefault(u8);

    assert_eq!(Optional::from_value(NoDefault(3)).try_unwrap(), Ok(NoDefault(3)));
    assert_eq!(Optional::<NoDefault>::empty().try_unwrap(), Err(OptionalError::InvalidState));
  }

  #[test]
  fn option_conversions() {
    assert_eq!(Optional::from(Some(5)), Optional::from_value(5));
    assert_eq!(Optional::<i32>::from(None), Optional::empty());
    assert_eq!(Option::<i32>::from(Optional::from_value(5)), Some(5));
    assert_eq!(Optional::from_value(5).get(), Some(&5));
    assert_eq!(Optional::<i32>::empty().into_option(), None);
  }

  #[test]
  fn default_is_absent() {
    struct NoDefault;
    assert!(Optional::<NoDefault>::default().is_absent());
  }

  #[test]
  fn deferred_is_ready_without_runtime() {
    assert_eq!(Optional::from_value(9).unwrap_deferred(true).now_or_never(), Some(Ok(9)));
    assert_eq!(Optional::<u32>::empty().unwrap_deferred(false).now_or_never(), Some(Ok(0)));
    assert_eq!(Optional::<u32>::empty().unwrap_deferred(true).now_or_never(), Some(Err(OptionalError::InvalidState)));
  }

  #[tokio::test]
  async fn deferred_matches_unwrap() {
    for optional in [Optional::from_value(7u64), Optional::empty()] {
      for throw_if_absent in [false, true] {
        assert_eq!(optional.unwrap_deferred(throw_if_absent).await, optional.unwrap(throw_if_absent));
        assert_eq!(optional.unwrap_deferred_boxed(throw_if_absent).await, optional.unwrap(throw_if_absent));
      }
    }
  }

  #[cfg(not(target_arch = "wasm32"))]
  #[tokio::test]
  async fn boxed_deferred_can_be_spawned() {
    let handle = tokio::spawn(Optional::from_value(String::from("spawned")).unwrap_deferred_boxed(true));
    let result = handle.await.expect("task should not panic");
    assert_eq!(result.as_deref(), Ok("spawned"));
  }

  #[cfg(feature = "serde")]
  #[test]
  fn serializes_like_option() {
    assert_eq!(serde_json::to_string(&Optional::from_value(3)).unwrap(), "3");
    assert_eq!(serde_json::to_string(&Optional::<i32>::empty()).unwrap(), "null");
    assert_eq!(serde_json::from_str::<Optional<i32>>("3").unwrap(), Optional::from_value(3));
    assert_eq!(serde_json::from_str::<Optional<i32>>("null").unwrap(), Optional::empty());
  }
}
