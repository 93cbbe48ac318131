//! Option and Either sum types with curried combinators, plus pipeline
//! builders for chaining them.

pub use fp_either as either;
pub use fp_function as function;
pub use fp_option as option;
