//! Demonstrate different kinds of cond

use micro_kanren::prelude::*;
use micro_kanren::{conda, conde, condu, conj, defrel, list, run};

defrel! {
    /// Create a goal that succeeds if x occurs in s1 or s2 and r contains the correct result
    whiche(x, s1, s2, r) {
        conde! {
            membero(x.clone(), s1.clone()), membero(x.clone(), s2.clone()), eq(r.clone(), "both");
            membero(x.clone(), s1.clone()), eq(r.clone(), "one");
            membero(x.clone(), s2.clone()), eq(r.clone(), "two");
        }
    }
}

defrel! {
    /// Like `whiche`, but commits to the first list that answers.
    whicha(x, s1, s2, r) {
        conda! {
            conj!(membero(x.clone(), s1.clone()), membero(x.clone(), s2.clone()), eq(r.clone(), "both"));
            conj!(membero(x.clone(), s1.clone()), eq(r.clone(), "one"));
            conj!(membero(x.clone(), s2.clone()), eq(r.clone(), "two"));
        }
    }
}

defrel! {
    /// Some member of s, but only the first one found.
    first_member(x, s) {
        condu! {
            membero(x.clone(), s.clone());
        }
    }
}

fn main() {
    println!(
        "Which list contains 3 using conde? {:?}",
        run!(*, q, whiche(3, list![1, 2, 3], list![3, 4, 5], q))
    );
    println!(
        "Which list contains 3 using conda? {:?}",
        run!(*, q, whicha(3, list![1, 2, 3], list![3, 4, 5], q))
    );
    println!(
        "First member using condu: {:?}",
        run!(*, q, first_member(q, list!["a", "b", "c"]))
    );
}
