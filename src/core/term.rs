//! Terms are the values logic variables range over.

use crate::core::logic_variable::Var;
use crate::core::pair::Pair;
use std::fmt::Formatter;
use std::sync::Arc;

/// An immutable, structurally compared term.
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum Term {
    /// The empty list.
    Nil,
    Symbol(Arc<str>),
    Var(Var),
    Pair(Arc<Pair>),
}

impl Default for Term {
    fn default() -> Self {
        Term::Nil
    }
}

impl Term {
    pub fn new(val: impl Into<Term>) -> Self {
        val.into()
    }

    pub fn symbol(name: impl Into<Arc<str>>) -> Self {
        Term::Symbol(name.into())
    }

    pub fn var(name: impl Into<Arc<str>>) -> Self {
        Term::Var(Var::new(name))
    }

    pub fn cons(car: impl Into<Term>, cdr: impl Into<Term>) -> Self {
        Term::Pair(Arc::new(Pair::new(car, cdr)))
    }

    /// Build a proper list.
    pub fn list(items: impl IntoIterator<Item = Term>) -> Self {
        Term::list_with_tail(items, Term::Nil)
    }

    /// Build a list that ends in `tail` instead of `()`.
    pub fn list_with_tail(items: impl IntoIterator<Item = Term>, tail: Term) -> Self {
        let items: Vec<Term> = items.into_iter().collect();
        items
            .into_iter()
            .rev()
            .fold(tail, |list, item| Term::cons(item, list))
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, Term::Nil)
    }

    pub fn is_symbol(&self) -> bool {
        matches!(self, Term::Symbol(_))
    }

    pub fn is_var(&self) -> bool {
        matches!(self, Term::Var(_))
    }

    pub fn is_pair(&self) -> bool {
        matches!(self, Term::Pair(_))
    }

    pub fn as_var(&self) -> Option<&Var> {
        match self {
            Term::Var(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_pair(&self) -> Option<(&Term, &Term)> {
        match self {
            Term::Pair(p) => Some((&p.first, &p.second)),
            _ => None,
        }
    }

    pub fn as_symbol(&self) -> Option<&str> {
        match self {
            Term::Symbol(s) => Some(s),
            _ => None,
        }
    }
}

impl std::fmt::Display for Term {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            Term::Nil => write!(f, "()"),
            Term::Symbol(s) => write!(f, "{}", s),
            Term::Var(v) => write!(f, "{}", v),
            Term::Pair(p) => write!(f, "{}", p),
        }
    }
}

impl std::fmt::Debug for Term {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        std::fmt::Display::fmt(self, f)
    }
}

impl PartialEq<Var> for Term {
    fn eq(&self, v: &Var) -> bool {
        self.as_var().map(|sv| sv == v).unwrap_or(false)
    }
}

impl PartialEq<&str> for Term {
    fn eq(&self, other: &&str) -> bool {
        self.as_symbol().map(|s| s == *other).unwrap_or(false)
    }
}

impl From<Var> for Term {
    fn from(v: Var) -> Self {
        Term::Var(v)
    }
}

impl From<Pair> for Term {
    fn from(p: Pair) -> Self {
        Term::Pair(Arc::new(p))
    }
}

impl From<&str> for Term {
    fn from(s: &str) -> Self {
        Term::symbol(s)
    }
}

impl From<String> for Term {
    fn from(s: String) -> Self {
        Term::symbol(s)
    }
}

impl From<i32> for Term {
    fn from(n: i32) -> Self {
        Term::symbol(n.to_string())
    }
}

impl From<()> for Term {
    fn from(_: ()) -> Self {
        Term::Nil
    }
}

impl<A: Into<Term>, B: Into<Term>> From<(A, B)> for Term {
    fn from(pair: (A, B)) -> Self {
        Term::cons(pair.0, pair.1)
    }
}

impl From<Vec<Term>> for Term {
    fn from(items: Vec<Term>) -> Self {
        Term::list(items)
    }
}
