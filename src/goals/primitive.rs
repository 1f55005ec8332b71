use crate::core::goal::Goal;
use crate::core::logic_variable::Var;
use crate::core::state::State;
use crate::core::stream::Stream;
use crate::core::term::Term;
use crate::goals::combinators::disj2;

/// Creates a goal that succeeds if `u` and `v` unify.
pub fn eq(u: impl Into<Term>, v: impl Into<Term>) -> impl Goal {
    let u = u.into();
    let v = v.into();
    move |s: State| match s.substitution().unify(&u, &v) {
        Some(subs) => Stream::singleton(s.with_substitution(subs)),
        None => Stream::empty(),
    }
}

/// Creates a goal that always succeeds once.
pub fn succeed() -> impl Goal {
    |s: State| Stream::singleton(s)
}

/// Creates a goal that never succeeds.
pub fn fail() -> impl Goal {
    |_: State| Stream::<State>::empty()
}

/// Creates a goal that introduces one fresh variable.
///
/// The variable is allocated from the state's counter and handed to
/// `f`; the goal it returns runs against the advanced state.
pub fn call_fresh<G: Goal>(f: impl 'static + Fn(Var) -> G) -> impl Goal {
    move |s: State| {
        let (x, s) = s.fresh();
        f(x).apply(s)
    }
}

/// Creates a goal that neither succeeds nor fails.
pub fn nevero() -> impl Goal {
    |s: State| Stream::suspension(move || nevero().apply(s))
}

/// Creates a goal that succeeds infinitely often.
pub fn alwayso() -> impl Goal {
    |s: State| Stream::suspension(move || disj2(succeed(), alwayso()).apply(s))
}
