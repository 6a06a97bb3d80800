use std::future::Future;

/// A trait alias that enforces `Send` only on native platforms.
pub use maybe_send::MaybeSend;
/// A boxed future that implements `Send` only on native platforms.
pub use maybe_send::MaybeSendBoxFuture;

/// A future that can be boxed into a trait object which implements `Send` only on native platforms.
pub trait MaybeSendFuture<'a>: Future {
  type Boxed: Future<Output=Self::Output>;
  fn boxed_maybe_send(self) -> Self::Boxed;
}

#[cfg(not(target_arch = "wasm32"))]
mod maybe_send {
  use std::future::Future;
  use std::pin::Pin;

  pub trait MaybeSend: Send {}

  impl<T> MaybeSend for T where T: Send {}

  pub type MaybeSendBoxFuture<'a, O> = Pin<Box<dyn Future<Output=O> + Send + 'a>>;

  impl<'a, F: Future + Send + 'a> super::MaybeSendFuture<'a> for F {
    type Boxed = MaybeSendBoxFuture<'a, F::Output>;
    #[inline]
    fn boxed_maybe_send(self) -> Self::Boxed { Box::pin(self) }
  }
}

#[cfg(target_arch = "wasm32")]
mod maybe_send {
  use std::future::Future;
  use std::pin::Pin;

  pub trait MaybeSend {}

  impl<T> MaybeSend for T {}

  pub type MaybeSendBoxFuture<'a, O> = Pin<Box<dyn Future<Output=O> + 'a>>;

  impl<'a, F: Future + 'a> super::MaybeSendFuture<'a> for F {
    type Boxed = MaybeSendBoxFuture<'a, F::Output>;
    #[inline]
    fn boxed_maybe_send(self) -> Self::Boxed { Box::pin(self) }
  }
}
