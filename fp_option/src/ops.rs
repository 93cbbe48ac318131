//! Curried forms of the combinators, for use as pipeline steps.

use crate::Option;
use log::trace;
use std::any;
use std::option::Option as Nilable;

pub fn some<T>(a: T) -> Option<T> {
  Option::Some(a)
}

pub fn none<T>() -> Option<T> {
  Option::None
}

pub fn from_nilable<T>(a: Nilable<T>) -> Option<T> {
  Option::from_nilable(a)
}

pub fn is_some<T>(o: &Option<T>) -> bool {
  o.is_some()
}

pub fn is_none<T>(o: &Option<T>) -> bool {
  o.is_none()
}

pub fn map<A, B>(f: impl Fn(A) -> B) -> impl Fn(Option<A>) -> Option<B> {
  move |o| o.map(&f)
}

pub fn chain<A, B>(
  f: impl Fn(A) -> Option<B>,
) -> impl Fn(Option<A>) -> Option<B> {
  move |o| o.chain(&f)
}

pub fn chain_nilable<A, B>(
  f: impl Fn(A) -> Nilable<B>,
) -> impl Fn(Option<A>) -> Option<B> {
  move |o| o.chain_nilable(&f)
}

pub fn filter<A>(pred: impl Fn(&A) -> bool) -> impl Fn(Option<A>) -> Option<A> {
  move |o| o.filter(&pred)
}

pub fn fold<A, B>(
  on_none: impl Fn() -> B,
  on_some: impl Fn(A) -> B,
) -> impl Fn(Option<A>) -> B {
  move |o| o.fold(&on_none, &on_some)
}

pub fn get_or_else<A>(on_none: impl Fn() -> A) -> impl Fn(Option<A>) -> A {
  move |o| o.get_or_else(&on_none)
}

/// Runs `f`, keeping its success and dropping any failure detail.
pub fn try_catch<A, E>(f: impl FnOnce() -> Result<A, E>) -> Option<A> {
  match f() {
    Ok(a) => Option::Some(a),
    Err(_) => {
      trace!("try_catch: discarding `{}` failure", any::type_name::<E>());
      Option::None
    }
  }
}

pub fn try_k<A, B, E>(
  f: impl Fn(A) -> Result<B, E>,
) -> impl Fn(A) -> Option<B> {
  move |a| try_catch(|| f(a))
}

pub fn chain_try_k<A, B, E>(
  f: impl Fn(A) -> Result<B, E>,
) -> impl Fn(Option<A>) -> Option<B> {
  move |o| o.chain(|a| try_catch(|| f(a)))
}
