//! Run queries and reify their answers.

use crate::core::goal::{run_goal, Goal, Limit};
use crate::core::logic_variable::Var;
use crate::core::state::State;
use crate::core::term::Term;
use crate::goals::primitive::call_fresh;

/// The variable a query receives: the first one allocated from the
/// empty state.
fn query_var() -> Term {
    let (q, _) = State::empty().fresh();
    q.into()
}

/// Run `query` for at most `limit` answers.
///
/// `query` receives a fresh variable and returns the goal to solve;
/// each answer is that variable, reified.
pub fn run<G: Goal>(limit: impl Into<Limit>, query: impl 'static + Fn(Var) -> G) -> Vec<Term> {
    let q = query_var();
    let goal = call_fresh(query);
    run_goal(limit, |s| goal.apply(s))
        .iter()
        .map(|s| s.reify(&q))
        .collect()
}

/// Lazily iterate over all answers of `query`.
pub fn run_iter<G: Goal>(query: impl 'static + Fn(Var) -> G) -> impl Iterator<Item = Term> {
    let q = query_var();
    call_fresh(query).iter().map(move |s| s.reify(&q))
}
