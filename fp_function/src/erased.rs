use log::error;
use std::any::{self, Any};
use std::fmt;
use thiserror::Error;

/// A value whose static type has been dropped for the length of a few
/// pipeline steps.
///
/// Getting the value back out with a type other than the one it went in with
/// is a bug in the caller, so [`downcast`](Self::downcast) panics instead of
/// returning an error.
pub struct Erased {
  value: Box<dyn Any>,
  type_name: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("erased value is `{found}`, not `{expected}`")]
pub struct Mismatch {
  pub expected: &'static str,
  pub found: &'static str,
}

impl Erased {
  pub fn new<T: Any>(value: T) -> Self {
    let value: Box<dyn Any> = Box::new(value);
    // erasing twice must not nest
    match value.downcast::<Erased>() {
      Ok(inner) => *inner,
      Err(value) => Self {
        value,
        type_name: any::type_name::<T>(),
      },
    }
  }

  pub fn type_name(&self) -> &'static str {
    self.type_name
  }

  pub fn is<T: Any>(&self) -> bool {
    self.value.is::<T>()
  }

  pub fn try_downcast<T: Any>(self) -> Result<T, Mismatch> {
    let found = self.type_name;
    self.value.downcast::<T>().map(|v| *v).map_err(|_| Mismatch {
      expected: any::type_name::<T>(),
      found,
    })
  }

  /// # Panics
  ///
  /// If the erased value is not a `T`.
  pub fn downcast<T: Any>(self) -> T {
    match self.try_downcast() {
      Ok(v) => v,
      Err(err) => {
        error!("type erasure violated: {}", err);
        panic!("{}", err)
      }
    }
  }
}

impl fmt::Debug for Erased {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Erased")
      .field("type_name", &self.type_name)
      .finish_non_exhaustive()
  }
}

/// Lifts a typed function so it can take an [`Erased`] argument, asserting
/// the argument's type on entry.
pub fn erased<A, B>(f: impl Fn(A) -> B) -> impl Fn(Erased) -> B
where
  A: Any,
{
  move |value| f(value.downcast())
}
