use super::stream::Stream;
use crate::core::state::State;
use crate::core::stream::StreamIter;
use tracing::debug;

/// How many results a run should produce.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Limit {
    All,
    AtMost(usize),
}

impl Limit {
    /// Negative counts (conventionally `-1`) request all results.
    /// Counts beyond `usize::MAX` saturate.
    pub fn from_signed(n: i64) -> Self {
        if n < 0 {
            Limit::All
        } else {
            Limit::AtMost(usize::try_from(n).unwrap_or(usize::MAX))
        }
    }

    fn is_reached(self, produced: usize) -> bool {
        match self {
            Limit::All => false,
            Limit::AtMost(n) => produced >= n,
        }
    }
}

impl From<usize> for Limit {
    fn from(n: usize) -> Self {
        Limit::AtMost(n)
    }
}

impl From<Option<usize>> for Limit {
    fn from(n: Option<usize>) -> Self {
        n.map_or(Limit::All, Limit::AtMost)
    }
}

/// A goal maps a state to a stream of states that satisfy it.
pub trait Goal: 'static {
    fn apply(&self, s: State) -> Stream<State>;

    /// Produce at most `n` states.
    fn run(&self, n: usize) -> Vec<State> {
        run_goal(n, |s| self.apply(s))
    }

    /// Produce all states. Does not return if there are infinitely many.
    fn run_inf(&self) -> Vec<State> {
        run_goal(Limit::All, |s| self.apply(s))
    }

    /// Lazily iterate over all states.
    fn iter(&self) -> StreamIter<State> {
        self.apply(State::empty()).into_iter()
    }
}

impl<G: 'static + Fn(State) -> Stream<State>> Goal for G {
    fn apply(&self, s: State) -> Stream<State> {
        self(s)
    }
}

/// Apply `goal` to the empty state and pull states until `limit`
/// is reached or the stream is exhausted.
///
/// Remaining suspended work is dropped unforced.
pub fn run_goal(limit: impl Into<Limit>, goal: impl FnOnce(State) -> Stream<State>) -> Vec<State> {
    let limit = limit.into();
    let mut stream = goal(State::empty());
    let mut states = Vec::new();
    let mut forced = 0usize;

    while !limit.is_reached(states.len()) {
        match stream {
            Stream::Empty => break,
            Stream::Pair(a, d) => {
                states.push(a);
                stream = *d;
            }
            Stream::Suspension(sup) => {
                forced += 1;
                stream = sup();
            }
        }
    }

    debug!(
        target: "micro_kanren::run",
        ?limit,
        produced = states.len(),
        forced,
        "goal run finished"
    );
    states
}
