//! Core data structures and logic algorithms

pub mod goal;
pub mod logic_variable;
pub mod pair;
pub mod parse;
pub mod reify;
pub mod state;
pub mod stream;
pub mod substitution;
pub mod term;
