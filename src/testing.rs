use crate::core::goal::Goal;
use crate::core::term::Term;

/// Build a substitution from `var: value` pairs, newest binding first.
macro_rules! substitution {
    () => { $crate::core::substitution::Substitution::empty() };

    ($($var:ident : $val:expr),* $(,)?) => {
        $crate::core::substitution::Substitution::from_bindings(vec![
            $(($var.clone(), $crate::core::term::Term::from($val.clone()))),*
        ])
        .expect("cyclic test substitution")
    };
}

/// Assert that a goal fails
pub fn fails(goal: impl Goal) {
    assert!(goal.run(1).is_empty());
}

/// Assert that a goal succeeds at least once
pub fn succeeds(goal: impl Goal) {
    assert!(!goal.run(1).is_empty());
}

pub fn has_unique_solution(solutions: impl IntoIterator<Item = Term>, expected: Term) {
    let mut solutions = solutions.into_iter();
    assert_eq!(solutions.next(), Some(expected));
    assert_eq!(solutions.next(), None);
}
