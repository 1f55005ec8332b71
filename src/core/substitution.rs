//! Substitutions map variables to terms.
//!
//! A substitution is an association list ordered from the newest
//! binding to the oldest. Extending a substitution never modifies it;
//! the extended version shares all older bindings with the original.

use crate::core::logic_variable::Var;
use crate::core::term::Term;
use std::fmt::Formatter;
use std::sync::Arc;

struct Binding {
    var: Var,
    value: Term,
    next: Option<Arc<Binding>>,
}

/// Ordered mapping of variables to terms.
#[derive(Clone, Default)]
pub struct Substitution {
    head: Option<Arc<Binding>>,
    len: usize,
}

impl Substitution {
    /// Initialize an empty substitution
    pub fn empty() -> Self {
        Substitution { head: None, len: 0 }
    }

    /// Build a substitution whose bindings appear in iteration order.
    ///
    /// The first item becomes the newest binding. Returns `None` if
    /// any binding would close a cycle through the older ones.
    pub fn from_bindings(bindings: impl IntoIterator<Item = (Var, Term)>) -> Option<Self> {
        let bindings: Vec<_> = bindings.into_iter().collect();
        bindings
            .into_iter()
            .rev()
            .try_fold(Substitution::empty(), |s, (x, v)| s.extend(x, v))
    }

    /// Get number of substituted variables
    pub fn n_subs(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Iterate over bindings from the newest to the oldest.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            next: self.head.as_deref(),
        }
    }

    /// Find the newest binding of `x`.
    pub fn lookup(&self, x: &Var) -> Option<&Term> {
        self.iter().find(|(var, _)| *var == x).map(|(_, value)| value)
    }

    /// Prepend a binding without checking for cycles.
    pub(crate) fn prepended(&self, x: Var, v: Term) -> Self {
        Substitution {
            head: Some(Arc::new(Binding {
                var: x,
                value: v,
                next: self.head.clone(),
            })),
            len: self.len + 1,
        }
    }

    /// Resolve the value of a variable by following bindings.
    ///
    /// If `v` is no variable or a variable that cannot be
    /// resolved (i.e. it is not substituted), `v` is returned.
    pub fn walk<'a>(&'a self, mut v: &'a Term) -> &'a Term {
        while let Term::Var(var) = v {
            match self.lookup(var) {
                Some(next) => v = next,
                None => break,
            }
        }
        v
    }

    /// Attempt to resolve any variables contained in `v`.
    pub fn walk_star(&self, v: &Term) -> Term {
        let mut items = Vec::new();
        let mut v = self.walk(v);
        while let Term::Pair(p) = v {
            items.push(self.walk_star(&p.first));
            v = self.walk(&p.second);
        }
        Term::list_with_tail(items, v.clone())
    }

    /// Extend substitution with a variable => term mapping.
    ///
    /// Binding a variable to itself leaves the substitution unchanged.
    /// Returns `None` if the insertion would result in a
    /// cyclic substitution.
    pub fn extend(&self, x: Var, v: Term) -> Option<Self> {
        if v == x {
            return Some(self.clone());
        }
        if self.occurs(&x, &v) {
            None
        } else {
            Some(self.prepended(x, v))
        }
    }

    /// Returns `true` if `v` contains a variable that is equivalent
    /// to `x` under this substitution.
    pub fn occurs(&self, x: &Var, v: &Term) -> bool {
        let mut v = v;
        loop {
            match self.walk(v) {
                Term::Var(var) => return var == x,
                Term::Pair(p) => {
                    if self.occurs(x, &p.first) {
                        return true;
                    }
                    v = &p.second;
                }
                Term::Nil | Term::Symbol(_) => return false,
            }
        }
    }

    /// Attempt to unify terms `u` and `v` under this substitution.
    ///
    /// Pairs are unified head first; the tails are handled in a loop.
    pub fn unify(&self, u: &Term, v: &Term) -> Option<Self> {
        let mut s = self.clone();
        let mut u = u.clone();
        let mut v = v.clone();

        loop {
            let a = s.walk(&u).clone();
            let b = s.walk(&v).clone();

            match (&a, &b) {
                (Term::Var(x), Term::Var(y)) if x == y => return Some(s),
                (Term::Var(x), _) => return s.extend(x.clone(), b.clone()),
                (_, Term::Var(y)) => return s.extend(y.clone(), a.clone()),
                (Term::Pair(p), Term::Pair(q)) => {
                    s = s.unify(&p.first, &q.first)?;
                    u = p.second.clone();
                    v = q.second.clone();
                }
                _ if a == b => return Some(s),
                _ => return None,
            }
        }
    }
}

impl Drop for Substitution {
    fn drop(&mut self) {
        // unlink uniquely owned bindings one by one
        let mut next = self.head.take();
        while let Some(node) = next {
            match Arc::try_unwrap(node) {
                Ok(mut binding) => next = binding.next.take(),
                Err(_) => break,
            }
        }
    }
}

pub struct Iter<'a> {
    next: Option<&'a Binding>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a Var, &'a Term);

    fn next(&mut self) -> Option<Self::Item> {
        let binding = self.next?;
        self.next = binding.next.as_deref();
        Some((&binding.var, &binding.value))
    }
}

impl<'a> IntoIterator for &'a Substitution {
    type Item = (&'a Var, &'a Term);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl PartialEq for Substitution {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl std::fmt::Display for Substitution {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        let mut iter = self.iter();
        if let Some((var, val)) = iter.next() {
            write!(f, "({} . {})", var, val)?;
        }
        for (var, val) in iter {
            write!(f, " ({} . {})", var, val)?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for Substitution {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{{")?;
        let mut iter = self.iter();
        if let Some((var, val)) = iter.next() {
            write!(f, "{:?}: {:?}", var, val)?;
        }
        for (var, val) in iter {
            write!(f, ", {:?}: {:?}", var, val)?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn walk(v: &Var, s: &Substitution) -> Term {
        s.walk(&Term::from(v.clone())).clone()
    }

    #[test]
    fn it_works() {
        let v = Var::new("v");
        let w = Var::new("w");
        let x = Var::new("x");
        let y = Var::new("y");
        let z = Var::new("z");

        assert_eq!(walk(&z, &substitution! {z: "a", x: w, y: z}), "a");
        assert_eq!(walk(&y, &substitution! {z: "a", x: w, y: z}), "a");
        assert_eq!(walk(&x, &substitution! {z: "a", x: w, y: z}), w);
        assert_eq!(walk(&x, &substitution! {x: y, v: x, w: x}), y);
        assert_eq!(walk(&v, &substitution! {x: y, v: x, w: x}), y);
        assert_eq!(walk(&w, &substitution! {x: y, v: x, w: x}), y);

        assert_eq!(
            substitution! {x: "b", z: y, w: vec![Term::from(x.clone()), "e".into(), z.clone().into()]}
                .walk_star(&w.clone().into()),
            Term::from(vec![Term::from("b"), "e".into(), y.clone().into()])
        );
    }

    #[test]
    fn walk_star_leaves_atoms_unchanged() {
        let s = substitution! {};
        assert_eq!(s.walk_star(&Term::new("a")), Term::new("a"));
        assert_eq!(s.walk_star(&Term::Nil), Term::Nil);
    }

    #[test]
    fn occurs_finds_variables_through_bindings() {
        let x = Var::new("x");
        let y = Var::new("y");

        assert!(Substitution::empty().occurs(&x, &x.clone().into()));
        assert!(!Substitution::empty().occurs(&x, &y.clone().into()));
        assert!(!Substitution::empty().occurs(&x, &Term::new("x")));
        assert!(substitution! {y: x}.occurs(&x, &Term::cons(y.clone(), ())));
    }

    #[test]
    fn extend_prepends_new_binding() {
        let x = Var::new("x");
        let s = Substitution::empty().extend(x.clone(), "a".into()).unwrap();
        assert_eq!(s.to_string(), "(,x . a)");
        assert_eq!(s.n_subs(), 1);
    }

    #[test]
    fn extend_with_same_variable_is_a_no_op() {
        let x = Var::new("x");
        let s = Substitution::empty().extend(x.clone(), x.into()).unwrap();
        assert!(s.is_empty());
    }

    #[test]
    fn extend_rejects_cycle_through_list() {
        let x = Var::new("x");
        assert_eq!(
            Substitution::empty().extend(x.clone(), Term::cons(x, ())),
            None
        );
    }

    #[test]
    fn extend_rejects_cycle_through_indirection() {
        let x = Var::new("x");
        let y = Var::new("y");
        let s = substitution! {y: x};
        assert_eq!(s.extend(x.clone(), y.clone().into()), None);
        assert_eq!(s.extend(x, Term::cons(y, ())), None);
        assert_eq!(s.n_subs(), 1);
    }

    #[test]
    fn extend_keeps_older_bindings_in_order() {
        let x = Var::new("x");
        let y = Var::new("y");
        let z = Var::new("z");
        let s = substitution! {z: x, y: z};
        let s = s.extend(x, "e".into()).unwrap();
        assert_eq!(s.to_string(), "(,x . e) (,z . ,x) (,y . ,z)");
    }

    #[test]
    fn unify_same_var_does_not_modify_substitution() {
        let var_as_val = Term::var("x");
        let sub = Substitution::empty().unify(&var_as_val, &var_as_val);
        assert_eq!(sub, Some(Substitution::empty()));
    }

    #[test]
    fn unify_two_vars_extends_substitution() {
        let x = Var::new("x");
        let y = Var::new("y");
        let sub = Substitution::empty()
            .unify(&x.clone().into(), &y.clone().into())
            .unwrap();
        let expected = Substitution::empty().extend(x, y.into()).unwrap();
        assert_eq!(sub, expected);
    }

    #[test]
    fn unify_value_with_var_extends_substitution() {
        let x = Var::new("x");
        let v = Term::new(0);
        let sub = Substitution::empty().unify(&v, &x.clone().into()).unwrap();
        let expected = Substitution::empty().extend(x, v).unwrap();
        assert_eq!(sub, expected);
    }

    #[test]
    fn unify_follows_existing_bindings() {
        let x = Var::new("x");
        let y = Var::new("y");
        let s = Substitution::empty()
            .unify(&x.clone().into(), &y.clone().into())
            .unwrap()
            .unify(&x.clone().into(), &Term::new(42))
            .unwrap();
        assert_eq!(s, substitution!(y: 42, x: y));
    }

    #[test]
    fn unify_same_values_does_not_modify_substitution() {
        let sub = Substitution::empty().unify(&Term::new(42), &Term::new(42));
        assert_eq!(sub, Some(Substitution::empty()));
    }

    #[test]
    fn unify_different_values_fails() {
        let sub = Substitution::empty().unify(&Term::new("a"), &Term::new("b"));
        assert_eq!(sub, None);
    }

    #[test]
    fn unify_pairs_component_wise() {
        let u: Term = "(,x b . ,r)".parse().unwrap();
        let v: Term = "(a ,y c)".parse().unwrap();
        let s = Substitution::empty().unify(&u, &v).unwrap();
        assert_eq!(s.walk_star(&u), "(a b c)".parse::<Term>().unwrap());
        assert_eq!(s.walk_star(&v), "(a b c)".parse::<Term>().unwrap());
    }

    #[test]
    fn unify_pair_with_atom_fails() {
        let sub = Substitution::empty().unify(&Term::cons("a", ()), &Term::new("a"));
        assert_eq!(sub, None);
        let sub = Substitution::empty().unify(&Term::cons("a", ()), &Term::Nil);
        assert_eq!(sub, None);
    }

    #[test]
    fn unify_stops_at_first_failing_component() {
        let x = Var::new("x");
        let u = Term::list(vec!["a".into(), x.clone().into()]);
        let v = Term::list(vec!["b".into(), "c".into()]);
        assert_eq!(Substitution::empty().unify(&u, &v), None);
    }

    #[test]
    fn from_bindings_rejects_cycles() {
        let x = Var::new("x");
        let y = Var::new("y");
        let s = Substitution::from_bindings(vec![
            (x.clone(), y.clone().into()),
            (y.clone(), x.clone().into()),
        ]);
        assert_eq!(s, None);
    }

    #[test]
    fn long_chains_drop_without_overflow() {
        let mut s = Substitution::empty();
        for i in 0..200_000 {
            s = s.prepended(Var::fresh(i), Term::new("a"));
        }
        assert_eq!(s.n_subs(), 200_000);
        drop(s);
    }

    fn numbers(n: i32) -> impl Iterator<Item = Term> {
        (0..n).map(Term::from)
    }

    #[test]
    fn long_lists_are_walked_without_overflow() {
        let x = Var::new("x");
        let l = Term::list_with_tail(numbers(200_000), x.clone().into());
        assert!(Substitution::empty().occurs(&x, &l));

        let s = substitution! {x: "end"};
        assert!(!s.occurs(&x, &l));
        assert!(s.walk_star(&l) == Term::list_with_tail(numbers(200_000), "end".into()));
    }

    #[test]
    fn long_lists_unify_without_overflow() {
        let x = Var::new("x");
        let u = Term::list_with_tail(numbers(200_000), x.clone().into());
        let v = Term::list(numbers(200_001));
        let s = Substitution::empty().unify(&u, &v).unwrap();
        assert_eq!(s.lookup(&x), Some(&Term::cons(200_000, ())));
        assert!(Substitution::empty().unify(&v, &Term::list(numbers(200_000))).is_none());
    }

    fn arb_var() -> impl Strategy<Value = Var> {
        "[a-e]".prop_map(Var::new)
    }

    fn arb_term() -> impl Strategy<Value = Term> {
        let leaf = prop_oneof![
            arb_var().prop_map(Term::from),
            "[p-t]".prop_map(Term::symbol),
            Just(Term::Nil),
        ];
        leaf.prop_recursive(4, 32, 2, |inner| {
            (inner.clone(), inner).prop_map(|(a, d)| Term::cons(a, d))
        })
    }

    fn arb_ground_term() -> impl Strategy<Value = Term> {
        let leaf = prop_oneof!["[p-t]".prop_map(Term::symbol), Just(Term::Nil)];
        leaf.prop_recursive(4, 32, 2, |inner| {
            (inner.clone(), inner).prop_map(|(a, d)| Term::cons(a, d))
        })
    }

    /// Builds a store by unifying random pairs, skipping the ones that fail.
    fn arb_substitution() -> impl Strategy<Value = Substitution> {
        prop::collection::vec((arb_term(), arb_term()), 0..6).prop_map(|eqs| {
            eqs.iter().fold(Substitution::empty(), |s, (u, v)| {
                s.unify(u, v).unwrap_or(s)
            })
        })
    }

    fn contains(x: &Var, t: &Term) -> bool {
        match t {
            Term::Var(v) => v == x,
            Term::Pair(p) => contains(x, &p.first) || contains(x, &p.second),
            _ => false,
        }
    }

    proptest! {
        #[test]
        fn occurs_check_is_sound(s in arb_substitution(), x in arb_var(), t in arb_term()) {
            let resolved = s.walk_star(&t);
            if contains(&x, &resolved) {
                prop_assert!(s.occurs(&x, &t));
                if t != x {
                    prop_assert_eq!(s.extend(x.clone(), t.clone()), None);
                }
            } else {
                prop_assert!(!s.occurs(&x, &t));
            }
        }

        #[test]
        fn binding_a_variable_to_itself_is_a_no_op(s in arb_substitution(), x in arb_var()) {
            prop_assert_eq!(s.extend(x.clone(), x.into()), Some(s));
        }

        #[test]
        fn successful_extension_prepends(s in arb_substitution(), x in arb_var(), t in arb_term()) {
            if let Some(extended) = s.extend(x.clone(), t.clone()) {
                if t != x {
                    let mut bindings = extended.iter();
                    prop_assert_eq!(bindings.next(), Some((&x, &t)));
                    prop_assert!(bindings.eq(s.iter()));
                }
            }
        }

        #[test]
        fn unification_is_reflexive_on_ground_terms(s in arb_substitution(), t in arb_ground_term()) {
            prop_assert_eq!(s.unify(&t, &t), Some(s));
        }

        #[test]
        fn unifier_makes_terms_equal(u in arb_term(), v in arb_term()) {
            if let Some(s) = Substitution::empty().unify(&u, &v) {
                prop_assert_eq!(s.walk_star(&u), s.walk_star(&v));
            }
        }
    }
}
