mod erased;
mod flow;
mod pipe;

pub use self::erased::*;
pub use self::flow::*;
pub use self::pipe::*;

pub fn identity<T>(a: T) -> T {
  a
}

/// `g ∘ f`
pub fn compose<A, B, C>(
  f: impl Fn(A) -> B,
  g: impl Fn(B) -> C,
) -> impl Fn(A) -> C {
  move |a| g(f(a))
}
