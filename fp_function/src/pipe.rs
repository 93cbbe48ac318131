use crate::Erased;
use log::trace;
use std::any::Any;
use std::marker::PhantomData;

/// A value being threaded through a chain of steps, currently holding the
/// result type `O`.
#[derive(Debug)]
pub struct Pipeline<O> {
  value: O,
}

/// A pipeline whose value has had its type erased. It has to go through
/// [`then_safe`](Self::then_safe) (or a checked
/// [`make_safe`](Self::make_safe)) before its result can be read as `O`.
#[derive(Debug)]
pub struct UnsafePipeline<O> {
  value: Erased,
  _result: PhantomData<fn() -> O>,
}

pub fn pipe<O>(value: O) -> Pipeline<O> {
  Pipeline { value }
}

/// Starts a pipeline from a value that is not yet an `O`.
pub fn pipe_unsafe<O, T>(value: T) -> UnsafePipeline<O>
where
  T: Any,
{
  UnsafePipeline::new(Erased::new(value))
}

impl<O> Pipeline<O> {
  pub fn then<F>(self, f: F) -> Self
  where
    F: FnOnce(O) -> O,
  {
    Self {
      value: f(self.value),
    }
  }

  /// Changes the result type along with the value.
  pub fn map<U, F>(self, f: F) -> Pipeline<U>
  where
    F: FnOnce(O) -> U,
  {
    Pipeline {
      value: f(self.value),
    }
  }

  pub fn then_unsafe<U, F>(self, f: F) -> UnsafePipeline<O>
  where
    U: Any,
    F: FnOnce(O) -> U,
  {
    UnsafePipeline::new(Erased::new(f(self.value)))
  }

  pub fn result(self) -> O {
    self.value
  }
}

impl<O: Any> Pipeline<O> {
  pub fn then_safe<F>(self, f: F) -> Self
  where
    F: FnOnce(Erased) -> O,
  {
    self.then(|value| f(Erased::new(value)))
  }

  pub fn then_erased<U, F>(self, f: F) -> UnsafePipeline<O>
  where
    U: Any,
    F: FnOnce(Erased) -> U,
  {
    UnsafePipeline::new(Erased::new(f(Erased::new(self.value))))
  }
}

impl<O> UnsafePipeline<O> {
  fn new(value: Erased) -> Self {
    trace!("pipeline holds erased `{}`", value.type_name());
    Self {
      value,
      _result: PhantomData,
    }
  }
}

impl<O: Any> UnsafePipeline<O> {
  /// Reasserts the result type: `f` receives the erased value and must
  /// produce a genuine `O`.
  pub fn then_safe<F>(self, f: F) -> Pipeline<O>
  where
    F: FnOnce(Erased) -> O,
  {
    pipe(f(self.value))
  }

  pub fn then_erased<U, F>(self, f: F) -> Self
  where
    U: Any,
    F: FnOnce(Erased) -> U,
  {
    Self::new(Erased::new(f(self.value)))
  }

  /// # Panics
  ///
  /// If the held value is not an `O`.
  pub fn make_safe(self) -> Pipeline<O> {
    pipe(self.value.downcast())
  }

  /// # Panics
  ///
  /// If the held value is not an `O`.
  pub fn result(self) -> O {
    self.make_safe().result()
  }
}
