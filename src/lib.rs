//! A fair, lazy microKanren core.
//!
//! Terms are unified against a persistent substitution, goals map a
//! state to a lazy stream of states, and disjunction interleaves its
//! branches so that one infinite branch cannot starve another.
//!
//! ```
//! use micro_kanren::prelude::*;
//! use micro_kanren::{conde, run};
//!
//! let answers = run!(*, q, conde!(eq(q.clone(), "tea"); eq(q, "cup")));
//! assert_eq!(answers, vec![Term::new("tea"), Term::new("cup")]);
//! ```

#[macro_use]
pub mod macros;
#[cfg(test)]
#[macro_use]
mod testing;

pub mod core;
pub mod goals;
pub mod prelude;
pub mod run;

#[doc(hidden)]
pub use tracing;
