//! Normalization by evaluation.
//!
//! Syntax is evaluated into [val::Val]ues under an [env::Env]ironment, where functions
//! become closures over their unevaluated body. Values are converted back into syntax
//! by [read_back::ReadBack]. The evaluator is total: whatever cannot be reduced, be it
//! because of a free variable or an ill-typed application, is kept as a neutral value.

pub mod apply;
pub mod env;
pub mod eval;
pub mod normalize;
pub mod read_back;
pub mod simplify;
pub mod val;
