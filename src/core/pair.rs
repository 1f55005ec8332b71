use crate::core::term::Term;
use std::fmt::{Display, Formatter, Result};
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// A cons cell.
///
/// Equality, hashing and dropping walk the `second` spine in a loop,
/// so long lists do not grow the call stack.
#[derive(Clone)]
pub struct Pair {
    pub first: Term,
    pub second: Term,
}

impl Pair {
    pub fn new(first: impl Into<Term>, second: impl Into<Term>) -> Self {
        Pair {
            first: first.into(),
            second: second.into(),
        }
    }
}

impl PartialEq for Pair {
    fn eq(&self, other: &Self) -> bool {
        let (mut a, mut b) = (self, other);
        loop {
            if a.first != b.first {
                return false;
            }
            match (&a.second, &b.second) {
                (Term::Pair(p), Term::Pair(q)) => {
                    if Arc::ptr_eq(p, q) {
                        return true;
                    }
                    a = &**p;
                    b = &**q;
                }
                (u, v) => return u == v,
            }
        }
    }
}

impl Eq for Pair {}

impl Hash for Pair {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut p = self;
        loop {
            p.first.hash(state);
            match &p.second {
                Term::Pair(next) => p = &**next,
                tail => {
                    tail.hash(state);
                    break;
                }
            }
        }
    }
}

impl Drop for Pair {
    fn drop(&mut self) {
        // unlink uniquely owned cells one by one
        let mut next = std::mem::take(&mut self.second);
        while let Term::Pair(cell) = next {
            match Arc::try_unwrap(cell) {
                Ok(mut pair) => next = std::mem::take(&mut pair.second),
                Err(_) => break,
            }
        }
    }
}

impl Display for Pair {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "({}", self.first)?;
        let mut rest = &self.second;
        loop {
            match rest {
                Term::Nil => break,
                Term::Pair(next) => {
                    write!(f, " {}", next.first)?;
                    rest = &next.second;
                }
                tail => {
                    write!(f, " . {}", tail)?;
                    break;
                }
            }
        }
        write!(f, ")")
    }
}

impl std::fmt::Debug for Pair {
    fn fmt(&self, f: &mut Formatter) -> Result {
        Display::fmt(self, f)
    }
}

impl<A: Into<Term>, B: Into<Term>> From<(A, B)> for Pair {
    fn from(pair: (A, B)) -> Self {
        Pair::new(pair.0, pair.1)
    }
}
