mod ops;

pub use self::ops::*;

use std::option::Option as Nilable;

/// A success (`Right`) or a typed failure (`Left`).
///
/// `map`, `chain` and `tap` only look at `Right`; `map_left` and `alt` only
/// look at `Left`. Whatever side they don't look at flows through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Either<E, A> {
  Left(E),
  Right(A),
}

impl<E, A> Either<E, A> {
  pub fn from_option<F>(o: fp_option::Option<A>, on_none: F) -> Self
  where
    F: FnOnce() -> E,
  {
    o.fold(|| Self::Left(on_none()), Self::Right)
  }

  pub fn is_left(&self) -> bool {
    matches!(self, Self::Left(_))
  }

  pub fn is_right(&self) -> bool {
    matches!(self, Self::Right(_))
  }

  pub fn as_ref(&self) -> Either<&E, &A> {
    match self {
      Self::Left(e) => Either::Left(e),
      Self::Right(a) => Either::Right(a),
    }
  }

  pub fn map<B, F>(self, f: F) -> Either<E, B>
  where
    F: FnOnce(A) -> B,
  {
    match self {
      Self::Left(e) => Either::Left(e),
      Self::Right(a) => Either::Right(f(a)),
    }
  }

  pub fn map_left<E1, F>(self, f: F) -> Either<E1, A>
  where
    F: FnOnce(E) -> E1,
  {
    match self {
      Self::Left(e) => Either::Left(f(e)),
      Self::Right(a) => Either::Right(a),
    }
  }

  pub fn chain<B, F>(self, f: F) -> Either<E, B>
  where
    F: FnOnce(A) -> Either<E, B>,
  {
    match self {
      Self::Left(e) => Either::Left(e),
      Self::Right(a) => f(a),
    }
  }

  /// Attempts to recover from a `Left`.
  pub fn alt<F>(self, f: F) -> Self
  where
    F: FnOnce(E) -> Self,
  {
    match self {
      Self::Left(e) => f(e),
      right => right,
    }
  }

  pub fn fold<B, L, R>(self, on_left: L, on_right: R) -> B
  where
    L: FnOnce(E) -> B,
    R: FnOnce(A) -> B,
  {
    match self {
      Self::Left(e) => on_left(e),
      Self::Right(a) => on_right(a),
    }
  }

  pub fn get_or_else<F>(self, on_left: F) -> A
  where
    F: FnOnce(E) -> A,
  {
    self.fold(on_left, |a| a)
  }

  pub fn get_or_else_value(self, or_else: A) -> A {
    match self {
      Self::Left(_) => or_else,
      Self::Right(a) => a,
    }
  }

  pub fn tap<R, F>(self, f: F) -> Self
  where
    F: FnOnce(&A) -> R,
  {
    if let Self::Right(a) = &self {
      f(a);
    }
    self
  }

  pub fn filter<P, F>(self, pred: P, on_false: F) -> Self
  where
    P: FnOnce(&A) -> bool,
    F: FnOnce(A) -> E,
  {
    match self {
      Self::Right(a) => {
        if pred(&a) {
          Self::Right(a)
        } else {
          Self::Left(on_false(a))
        }
      }
      left => left,
    }
  }

  /// Both sides, at most one of which is present. Use
  /// [`is_left`](Self::is_left) or [`into_result`](Self::into_result) when
  /// the tag is what matters.
  pub fn unwrap(self) -> (Nilable<E>, Nilable<A>) {
    match self {
      Self::Left(e) => (Nilable::Some(e), Nilable::None),
      Self::Right(a) => (Nilable::None, Nilable::Some(a)),
    }
  }

  pub fn into_result(self) -> Result<A, E> {
    match self {
      Self::Left(e) => Err(e),
      Self::Right(a) => Ok(a),
    }
  }

  pub fn into_option(self) -> fp_option::Option<A> {
    match self {
      Self::Left(_) => fp_option::Option::None,
      Self::Right(a) => fp_option::Option::Some(a),
    }
  }
}

impl<E, A> From<Result<A, E>> for Either<E, A> {
  fn from(r: Result<A, E>) -> Self {
    match r {
      Ok(a) => Self::Right(a),
      Err(e) => Self::Left(e),
    }
  }
}

impl<E, A> From<Either<E, A>> for Result<A, E> {
  fn from(either: Either<E, A>) -> Self {
    either.into_result()
  }
}

impl<E, A> From<Either<E, A>> for fp_option::Option<A> {
  fn from(either: Either<E, A>) -> Self {
    either.into_option()
  }
}
