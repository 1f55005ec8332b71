//! Reification turns the terms found by a search into presentable
//! answers. Variables that are still fresh are replaced by the
//! canonical symbols `_.0`, `_.1`, ... in order of first occurrence.

use crate::core::logic_variable::Var;
use crate::core::state::State;
use crate::core::substitution::Substitution;
use crate::core::term::Term;

/// Canonical name of the `n`th fresh variable.
pub fn reify_name(n: usize) -> Term {
    Term::symbol(format!("_.{}", n))
}

impl Substitution {
    /// Bind every variable that remains fresh in `v` to its canonical name.
    ///
    /// Used on a separate, initially empty substitution; the numbering
    /// follows the number of bindings already recorded.
    pub fn reify_s(&self, v: &Term) -> Self {
        let mut r = self.clone();
        let mut v = v.clone();
        loop {
            let w = r.walk(&v).clone();
            match w {
                Term::Var(var) => {
                    let name = reify_name(r.n_subs());
                    return r.prepended(var, name);
                }
                Term::Pair(p) => {
                    r = r.reify_s(&p.first);
                    v = p.second.clone();
                }
                Term::Nil | Term::Symbol(_) => return r,
            }
        }
    }

    /// Replace all variables contained in `v` with their substituted
    /// values and reify variables without substitution.
    pub fn reify(&self, v: &Term) -> Term {
        let v = self.walk_star(v);
        let r = Substitution::empty().reify_s(&v);
        r.walk_star(&v)
    }
}

impl State {
    pub fn reify(&self, v: &Term) -> Term {
        self.substitution().reify(v)
    }
}

/// Curried reification of one variable.
pub fn reify_var(v: Var) -> impl Fn(&State) -> Term {
    let v = Term::from(v);
    move |s: &State| s.reify(&v)
}

/// Reify `v` in each of the `states`, keeping their order.
pub fn reify(v: &Var, states: &[State]) -> Vec<Term> {
    states.iter().map(reify_var(v.clone())).collect()
}
