use crate::core::term::Term;
use crate::goals::primitive::eq;

#[macro_export]
macro_rules! list {
    () => { $crate::prelude::Term::Nil };

    ($single:expr) => {
        $crate::prelude::Term::cons($single, ())
    };

    ($car:expr ; $cdr:expr) => {
        $crate::prelude::Term::cons($car, $cdr)
    };

    (($($first:tt)*), $($rest:tt)*) => {
        $crate::prelude::Term::cons($crate::list![$($first)*], $crate::list![$($rest)*])
    };

    ($first:expr, $($rest:tt)*) => {
        $crate::prelude::Term::cons($first, $crate::list![$($rest)*])
    };

}

defrel! {
    pub conso(a, d, p) {
        eq((a, d), p)
    }
}

defrel! {
    pub caro(p, a) {
        fresh!{ (d),
            eq((a.clone(), d), p.clone())
        }
    }
}

defrel! {
    pub cdro(p, d) {
        fresh!{ (a),
            eq((a, d.clone()), p.clone())
        }
    }
}

defrel! {
    /// Creates a goal that succeeds if l is the empty list.
    pub nullo(l) {
        eq(Term::Nil, l)
    }
}

defrel! {
    pub membero(x, l) {
        conde!(
            caro(l.clone(), x.clone());
            fresh!{ (d),
                cdro(l.clone(), d.clone()),
                membero(x.clone(), d),
            })
    }
}

defrel! {
    /// Creates a goal that succeeds if `out` is `l` followed by `s`.
    pub appendo(l, s, out) {
        conde!(
            nullo(l.clone()), eq(s.clone(), out.clone());
            fresh!{ (a, d, res),
                conso(a.clone(), d.clone(), l.clone()),
                conso(a, res.clone(), out.clone()),
                appendo(d, s.clone(), res),
            })
    }
}
