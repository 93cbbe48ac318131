use crate::Erased;
use log::trace;
use std::any::{self, Any};
use std::marker::PhantomData;

/// A function `I -> O` under construction. Each step composes onto the end of
/// what has been built so far; nothing runs until the finished function is
/// called.
pub struct Flow<I, O> {
  f: Box<dyn Fn(I) -> O>,
}

/// A flow whose intermediate output has had its type erased.
pub struct UnsafeFlow<I, O> {
  f: Box<dyn Fn(I) -> Erased>,
  _result: PhantomData<fn() -> O>,
}

pub fn flow<I, O>(f: impl Fn(I) -> O + 'static) -> Flow<I, O> {
  Flow { f: Box::new(f) }
}

/// Starts a flow whose first step does not produce an `O`.
pub fn flow_unsafe<O, I, U>(
  f: impl Fn(I) -> U + 'static,
) -> UnsafeFlow<I, O>
where
  I: 'static,
  U: Any,
{
  UnsafeFlow::new(Box::new(move |i| Erased::new(f(i))))
}

impl<I: 'static, O: 'static> Flow<I, O> {
  pub fn then(self, g: impl Fn(O) -> O + 'static) -> Self {
    let f = self.f;
    Self {
      f: Box::new(move |i| g(f(i))),
    }
  }

  /// Changes the result type along with the output.
  pub fn map<U>(self, g: impl Fn(O) -> U + 'static) -> Flow<I, U> {
    let f = self.f;
    Flow {
      f: Box::new(move |i| g(f(i))),
    }
  }

  pub fn then_unsafe<U>(
    self,
    g: impl Fn(O) -> U + 'static,
  ) -> UnsafeFlow<I, O>
  where
    U: Any,
  {
    let f = self.f;
    UnsafeFlow::new(Box::new(move |i| Erased::new(g(f(i)))))
  }

  pub fn result(self) -> Box<dyn Fn(I) -> O> {
    self.f
  }
}

impl<I: 'static, O: Any> Flow<I, O> {
  pub fn then_safe(self, g: impl Fn(Erased) -> O + 'static) -> Self {
    self.then(move |o| g(Erased::new(o)))
  }

  pub fn then_erased<U>(
    self,
    g: impl Fn(Erased) -> U + 'static,
  ) -> UnsafeFlow<I, O>
  where
    U: Any,
  {
    self.then_unsafe(move |o| g(Erased::new(o)))
  }
}

impl<I, O> UnsafeFlow<I, O> {
  fn new(f: Box<dyn Fn(I) -> Erased>) -> Self {
    trace!("flow output erased, result type `{}`", any::type_name::<O>());
    Self {
      f,
      _result: PhantomData,
    }
  }
}

impl<I: 'static, O: Any> UnsafeFlow<I, O> {
  /// Reasserts the result type: `g` receives the erased output and must
  /// produce a genuine `O`.
  pub fn then_safe(self, g: impl Fn(Erased) -> O + 'static) -> Flow<I, O> {
    let f = self.f;
    Flow {
      f: Box::new(move |i| g(f(i))),
    }
  }

  pub fn then_erased<U>(self, g: impl Fn(Erased) -> U + 'static) -> Self
  where
    U: Any,
  {
    let f = self.f;
    Self::new(Box::new(move |i| Erased::new(g(f(i)))))
  }

  /// The finished function panics when called if the erased output is not
  /// an `O`.
  pub fn make_safe(self) -> Flow<I, O> {
    self.then_safe(Erased::downcast)
  }
}
