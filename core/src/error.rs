use thiserror::Error;

/// Error returned when extracting the value of an [`Optional`](crate::optional::Optional) fails.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq, Hash)]
pub enum OptionalError {
  /// Unwrap was called on an absent optional while the caller asked for failure instead of a default value.
  #[error("cannot unwrap an absent optional")]
  InvalidState,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn invalid_state_message() {
    assert_eq!(OptionalError::InvalidState.to_string(), "cannot unwrap an absent optional");
  }
}
