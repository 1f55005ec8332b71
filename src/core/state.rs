use crate::core::logic_variable::Var;
use crate::core::substitution::Substitution;
use std::fmt::Formatter;

/// A search state: the substitution found so far and the counter
/// from which fresh variables are allocated.
#[derive(Clone, PartialEq, Default)]
pub struct State {
    subs: Substitution,
    counter: usize,
}

impl State {
    pub fn empty() -> Self {
        State::default()
    }

    pub fn new(subs: Substitution, counter: usize) -> Self {
        State { subs, counter }
    }

    pub fn substitution(&self) -> &Substitution {
        &self.subs
    }

    pub fn counter(&self) -> usize {
        self.counter
    }

    /// Replace the substitution, keeping the counter.
    pub fn with_substitution(&self, subs: Substitution) -> Self {
        State {
            subs,
            counter: self.counter,
        }
    }

    /// Allocate a fresh variable.
    pub fn fresh(self) -> (Var, Self) {
        let var = Var::fresh(self.counter);
        let state = State {
            subs: self.subs,
            counter: self.counter + 1,
        };
        (var, state)
    }
}

impl std::fmt::Display for State {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        if self.subs.is_empty() {
            write!(f, "(() . {})", self.counter)
        } else {
            write!(f, "({} . {})", self.subs, self.counter)
        }
    }
}

impl std::fmt::Debug for State {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "({:?} . {})", self.subs, self.counter)
    }
}
