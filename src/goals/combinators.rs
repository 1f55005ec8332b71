//! Compose goals using combinators to build more complex goals
//!

use crate::core::goal::Goal;
use crate::core::state::State;
use crate::core::stream::Stream;
use std::sync::Arc;

/// Creates a goal that succeeds if either of its subgoals succeeds.
///
/// The two result streams are interleaved, so an infinite first
/// subgoal does not hide the results of the second.
pub fn disj2(g1: impl Goal, g2: impl Goal) -> impl Goal {
    move |s: State| Stream::append_inf(g1.apply(s.clone()), g2.apply(s))
}

/// Creates a goal that succeeds if both of its subgoals succeed.
pub fn conj2(g1: impl Goal, g2: impl Goal) -> impl Goal {
    let g2: Arc<dyn Fn(State) -> Stream<State>> = Arc::new(move |s: State| g2.apply(s));
    move |s: State| g1.apply(s).append_map_inf(g2.clone())
}

/// Creates a goal that succeeds if g_cond and g_then succeed or g_cond fails and g_else succeeds.
pub fn ifte(g_cond: impl Goal, g_then: impl Goal, g_else: impl Goal) -> impl Goal {
    let g_then: Arc<dyn Fn(State) -> Stream<State>> = Arc::new(move |s: State| g_then.apply(s));
    move |s: State| match g_cond.apply(s.clone()).mature() {
        Stream::Empty => g_else.apply(s),
        s_inf => s_inf.append_map_inf(g_then.clone()),
    }
}

/// Creates a goal that succeeds at most once.
pub fn once(g: impl Goal) -> impl Goal {
    move |s: State| match g.apply(s).mature() {
        Stream::Pair(a, _) => Stream::singleton(a),
        _ => Stream::empty(),
    }
}
