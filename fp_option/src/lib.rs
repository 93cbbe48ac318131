mod ops;
#[cfg(feature = "serde")]
mod ser;

pub use self::ops::*;

use std::option::Option as Nilable;
use thiserror::Error;

/// Presence or absence of a `T`.
///
/// Every combinator consumes the receiver and builds a new value, so an
/// `Option` is never observed half-updated.
///
/// Ordering matches `std`: `None` sorts before any `Some`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Option<T> {
  None,
  Some(T),
}

/// Signal returned by [`Option::unwrap`] when there is nothing to unwrap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unwrap: got none")]
pub struct Absent;

impl<T> Option<T> {
  pub fn from_nilable(a: Nilable<T>) -> Self {
    match a {
      Nilable::Some(a) => Self::Some(a),
      Nilable::None => Self::None,
    }
  }

  pub fn is_some(&self) -> bool {
    matches!(self, Self::Some(_))
  }

  pub fn is_none(&self) -> bool {
    matches!(self, Self::None)
  }

  pub fn as_ref(&self) -> Option<&T> {
    match self {
      Self::Some(a) => Option::Some(a),
      Self::None => Option::None,
    }
  }

  pub fn map<U, F>(self, f: F) -> Option<U>
  where
    F: FnOnce(T) -> U,
  {
    match self {
      Self::Some(a) => Option::Some(f(a)),
      Self::None => Option::None,
    }
  }

  pub fn chain<U, F>(self, f: F) -> Option<U>
  where
    F: FnOnce(T) -> Option<U>,
  {
    match self {
      Self::Some(a) => f(a),
      Self::None => Option::None,
    }
  }

  /// Like [`chain`](Self::chain), for functions that report absence with a
  /// plain `std` option.
  pub fn chain_nilable<U, F>(self, f: F) -> Option<U>
  where
    F: FnOnce(T) -> Nilable<U>,
  {
    self.chain(|a| Option::from_nilable(f(a)))
  }

  pub fn filter<P>(self, pred: P) -> Self
  where
    P: FnOnce(&T) -> bool,
  {
    match self {
      Self::Some(a) => {
        if pred(&a) {
          Self::Some(a)
        } else {
          Self::None
        }
      }
      Self::None => Self::None,
    }
  }

  pub fn fold<B, N, S>(self, on_none: N, on_some: S) -> B
  where
    N: FnOnce() -> B,
    S: FnOnce(T) -> B,
  {
    match self {
      Self::Some(a) => on_some(a),
      Self::None => on_none(),
    }
  }

  pub fn get_or_else<F>(self, on_none: F) -> T
  where
    F: FnOnce() -> T,
  {
    match self {
      Self::Some(a) => a,
      Self::None => on_none(),
    }
  }

  pub fn get_or_else_value(self, or_else: T) -> T {
    match self {
      Self::Some(a) => a,
      Self::None => or_else,
    }
  }

  /// Structural extraction. Never panics: absence comes back as [`Absent`]
  /// and the caller decides what to do with it.
  pub fn unwrap(self) -> Result<T, Absent> {
    match self {
      Self::Some(a) => Ok(a),
      Self::None => Err(Absent),
    }
  }

  pub fn into_nilable(self) -> Nilable<T> {
    match self {
      Self::Some(a) => Nilable::Some(a),
      Self::None => Nilable::None,
    }
  }
}

impl<T> Default for Option<T> {
  fn default() -> Self {
    Self::None
  }
}

impl<T> From<Nilable<T>> for Option<T> {
  fn from(a: Nilable<T>) -> Self {
    Self::from_nilable(a)
  }
}

impl<T> From<Option<T>> for Nilable<T> {
  fn from(o: Option<T>) -> Self {
    o.into_nilable()
  }
}
