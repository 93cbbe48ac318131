use crate::Either;
use fp_option::Option;

pub fn left<E, A>(e: E) -> Either<E, A> {
  Either::Left(e)
}

pub fn right<E, A>(a: A) -> Either<E, A> {
  Either::Right(a)
}

pub fn from_option<E, A>(
  on_none: impl Fn() -> E,
) -> impl Fn(Option<A>) -> Either<E, A> {
  move |o| Either::from_option(o, &on_none)
}

pub fn map<E, A, B>(
  f: impl Fn(A) -> B,
) -> impl Fn(Either<E, A>) -> Either<E, B> {
  move |e| e.map(&f)
}

pub fn map_left<E, A, E1>(
  f: impl Fn(E) -> E1,
) -> impl Fn(Either<E, A>) -> Either<E1, A> {
  move |e| e.map_left(&f)
}

pub fn chain<E, A, B>(
  f: impl Fn(A) -> Either<E, B>,
) -> impl Fn(Either<E, A>) -> Either<E, B> {
  move |e| e.chain(&f)
}

pub fn alt<E, A>(
  f: impl Fn(E) -> Either<E, A>,
) -> impl Fn(Either<E, A>) -> Either<E, A> {
  move |e| e.alt(&f)
}

pub fn fold<E, A, B>(
  on_left: impl Fn(E) -> B,
  on_right: impl Fn(A) -> B,
) -> impl Fn(Either<E, A>) -> B {
  move |e| e.fold(&on_left, &on_right)
}

pub fn get_or_else<E, A>(
  on_left: impl Fn(E) -> A,
) -> impl Fn(Either<E, A>) -> A {
  move |e| e.get_or_else(&on_left)
}

pub fn tap<E, A, R>(
  f: impl Fn(&A) -> R,
) -> impl Fn(Either<E, A>) -> Either<E, A> {
  move |e| e.tap(&f)
}

pub fn filter<E, A>(
  pred: impl Fn(&A) -> bool,
  on_false: impl Fn(A) -> E,
) -> impl Fn(Either<E, A>) -> Either<E, A> {
  move |e| e.filter(&pred, &on_false)
}

/// Runs `f`, turning its failure into a `Left` through `on_error`.
pub fn try_catch<E, A, X>(
  f: impl FnOnce() -> Result<A, X>,
  on_error: impl FnOnce(X) -> E,
) -> Either<E, A> {
  match f() {
    Ok(a) => Either::Right(a),
    Err(err) => Either::Left(on_error(err)),
  }
}

pub fn try_k<E, A, B, X>(
  f: impl Fn(A) -> Result<B, X>,
  on_error: impl Fn(X) -> E,
) -> impl Fn(A) -> Either<E, B> {
  move |a| try_catch(|| f(a), &on_error)
}

pub fn chain_try_k<E, A, B, X>(
  f: impl Fn(A) -> Result<B, X>,
  on_error: impl Fn(X) -> E,
) -> impl Fn(Either<E, A>) -> Either<E, B> {
  move |e| e.chain(|a| try_catch(|| f(a), &on_error))
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;
  use std::cell::Cell;

  fn fail<X>(_: X) -> &'static str {
    "fail"
  }

  #[test]
  fn try_catch_success() {
    let either = try_catch(|| Ok::<i32, String>(123), fail);
    assert!(either.is_right());
    assert_eq!(either.unwrap(), (None, Some(123)));
  }

  #[test]
  fn try_catch_failure() {
    let either = try_catch(|| Err::<i32, _>("asdf".to_owned()), fail);
    assert!(either.is_left());
    assert_eq!(either.unwrap(), (Some("fail"), None));
  }

  #[test]
  fn try_catch_keeps_failure_detail() {
    let either: Either<String, i32> =
      try_catch(|| "x1".parse::<i32>(), |err| err.to_string());
    assert_eq!(
      either,
      Either::Left("invalid digit found in string".to_owned())
    );
  }

  #[test]
  fn try_k_curries() {
    let parse = try_k(|s: &str| s.parse::<i32>(), fail);
    assert_eq!(parse("12"), right(12));
    assert_eq!(parse("twelve"), left("fail"));
  }

  #[test]
  fn chain_try_k_propagates_left() {
    let calls = Cell::new(0);
    let parse = chain_try_k(
      |s: &str| {
        calls.set(calls.get() + 1);
        s.parse::<i32>()
      },
      fail,
    );

    assert_eq!(parse(right("5")), right(5));
    assert_eq!(parse(right("five")), left("fail"));
    assert_eq!(parse(left("earlier")), left("earlier"));
    assert_eq!(calls.get(), 2);
  }

  #[test]
  fn from_option_curried() {
    let to_either = from_option(|| "was none");
    assert_eq!(to_either(Option::Some(1)).get_or_else_value(-1), 1);
    assert_eq!(to_either(Option::None), left("was none"));
  }

  #[test]
  fn curried_combinators() {
    let double = map(|x: i32| x * 2);
    assert_eq!(double(right::<&str, _>(4)), right(8));
    assert_eq!(double(left("no")), left("no"));

    let loud = map_left(|e: &str| e.to_uppercase());
    assert_eq!(loud(left::<_, i32>("no")), left("NO".to_owned()));

    let recover = alt(|_: String| right(0));
    assert_eq!(recover(left("no".to_owned())), right(0));

    let halve = chain(|x: i32| {
      if x % 2 == 0 {
        right(x / 2)
      } else {
        left("odd")
      }
    });
    assert_eq!(halve(right(3)), left("odd"));

    let positive = filter(|x: &i32| *x > 0, |x| format!("{} <= 0", x));
    assert_eq!(positive(right(-1)), left("-1 <= 0".to_owned()));

    let len = fold(|e: String| e.len(), |a: Vec<u8>| a.len());
    assert_eq!(len(right(vec![1, 2])), 2);

    assert_eq!(get_or_else(|e: i32| e * 10)(left(4)), 40);
  }

  #[test]
  fn tap_curried_runs_on_right_only() {
    let seen = Cell::new(0);
    let record = tap(|x: &i32| seen.set(seen.get() + *x));
    assert_eq!(record(right::<&str, _>(5)), right(5));
    assert_eq!(record(left("no")), left("no"));
    assert_eq!(seen.get(), 5);
  }
}
