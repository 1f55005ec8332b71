//! Macros for embedding miniKANREN as DSL in Rust

/// Creates a goal that succeeds if any of its subgoals succeeds
#[macro_export]
macro_rules! disj {
    () => { $crate::prelude::fail() };
    ($g:expr) => { $g };
    ($g0:expr; $($g:expr);*) => { $crate::prelude::disj2($g0, $crate::disj!($($g);*))}
}

/// Creates a goal that succeeds if all of its subgoals succeed
#[macro_export]
macro_rules! conj {
    () => { $crate::prelude::succeed() };
    ($g:expr) => { $g };
    ($g0:expr, $($g:expr),*) => { $crate::prelude::conj2($g0, $crate::conj!($($g),*))}
}

/// Define a relation.
/// A relation is a function that creates a goal.
///
/// The body runs inside a suspension, which is what keeps recursive
/// relations from expanding forever before the search reaches them.
/// Prefix the name with `trace` to log every application at trace level.
#[macro_export]
macro_rules! defrel {

    ($(#[$outer:meta])* pub $name:ident($($args:ident),*) { $($g:expr),* $(,)? }) => {
        $(#[$outer])*
        pub fn $name($($args: impl 'static + Into<$crate::prelude::Term>),*) -> impl $crate::prelude::Goal {
            $crate::defrel!(@body: $($args),* { $($g),* })
        }
    };

    ($(#[$outer:meta])* $name:ident($($args:ident),*) { $($g:expr),* $(,)? }) => {
        $(#[$outer])*
        fn $name($($args: impl 'static + Into<$crate::prelude::Term>),*) -> impl $crate::prelude::Goal {
            $crate::defrel!(@body: $($args),* { $($g),* })
        }
    };

    ($(#[$outer:meta])* pub trace $name:ident($($args:ident),*) { $($g:expr),* $(,)? }) => {
        $(#[$outer])*
        pub fn $name($($args: impl 'static + Into<$crate::prelude::Term>),*) -> impl $crate::prelude::Goal {
            $crate::defrel!(@tracebody: $name, $($args),* { $($g),* })
        }
    };

    ($(#[$outer:meta])* trace $name:ident($($args:ident),*) { $($g:expr),* $(,)? }) => {
        $(#[$outer])*
        fn $name($($args: impl 'static + Into<$crate::prelude::Term>),*) -> impl $crate::prelude::Goal {
            $crate::defrel!(@tracebody: $name, $($args),* { $($g),* })
        }
    };

    // alternate syntax: separate goals with ;
    (pub $name:ident($($args:ident),*) { $($g:expr);* $(;)? }) => {
        $crate::defrel!{pub $name($($args),*) { $($g),* }}
    };

    // alternate syntax: separate goals with ;
    ($name:ident($($args:ident),*) { $($g:expr);* $(;)? }) => {
        $crate::defrel!{$name($($args),*) { $($g),* }}
    };

    (@body: $($args:ident),* { $($g:expr),* }) => {{
        $(
            let $args: $crate::prelude::Term = $args.into();
        )*
        move |s: $crate::prelude::State| {
            $(
                let $args = $args.clone();
            )*
            $crate::prelude::Stream::suspension(move || {
                $crate::prelude::Goal::apply(&$crate::conj!($($g),*), s)
            })
        }
    }};

    (@tracebody: $name:ident, $($args:ident),* { $($g:expr),* }) => {{
        $(
            let $args: $crate::prelude::Term = $args.into();
        )*
        move |s: $crate::prelude::State| {
            $crate::tracing::trace!(
                target: "micro_kanren::relation",
                relation = stringify!($name),
                $($args = %s.reify(&$args),)*
                "apply"
            );

            $(
                let $args = $args.clone();
            )*

            $crate::prelude::Stream::suspension(move || {
                $crate::prelude::Goal::apply(&$crate::conj!($($g),*), s)
            })
        }
    }};
}

/// Run one or more goals.
///
/// The syntax `run!(n, var(s), goal1, goal2, ...)` produces at most n
/// solutions. In Scheme you would write `(run n var(s) goal1 goal2 ...)`.
/// The syntax `run!(*, var(s), goal1, goal2, ...)` produces all
/// solutions. In Scheme you would write `(run* var(s) goal1 goal2 ...)`.
/// The latter does not return if there are infinitely many solutions.
///
/// We support an additional syntax `run!(var(s), goal1, goal2, ...)`
/// that returns a (possibly infinite) iterator over all solutions.
///
/// The query variables are allocated from the state counter, so goals
/// that use one of them more than once need to `clone()` it.
#[macro_export]
macro_rules! run {
    (*, ($($x:ident),*), $($g:expr),* $(,)?) => {
        $crate::run!(@ ($crate::prelude::Limit::All), ($($x),*), $($g),*)
    };

    (*, $q:ident, $($g:expr),* $(,)?) => {
        $crate::run!(@ ($crate::prelude::Limit::All), $q, $($g),*)
    };

    ($n:literal, ($($x:ident),*), $($g:expr),* $(,)?) => {
        $crate::run!(@ ($n), ($($x),*), $($g),*)
    };

    ($n:literal, $q:ident, $($g:expr),* $(,)?) => {
        $crate::run!(@ ($n), $q, $($g),*)
    };

    (($($x:ident),*), $($g:expr),* $(,)?) => {
        $crate::run!(@ iter, ($($x),*), $($g),*)
    };

    ($q:ident, $($g:expr),* $(,)?) => {
        $crate::run!(@ iter, $q, $($g),*)
    };

    (@ $n:tt, ($($x:ident),*), $($g:expr),*) => {
        $crate::run!(@ $n, q, {
            $crate::fresh!(
                ($($x),*),
                $crate::prelude::eq(vec![$($crate::prelude::Term::from($x.clone())),*], q.clone()),
                $($g),*
            )
        })
    };

    (@ iter, $q:ident, $($g:expr),*) => {
        {
            #[allow(unused_variables)]
            let query = move |$q: $crate::prelude::Var| $crate::conj!($($g),*);
            $crate::run::run_iter(query)
        }
    };

    (@ ($n:expr), $q:ident, $($g:expr),*) => {
        {
            #[allow(unused_variables)]
            let query = move |$q: $crate::prelude::Var| $crate::conj!($($g),*);
            $crate::run::run($n, query)
        }
    };
}

/// Bind fresh variables with scope inside the body of `fresh!`.
///
/// Each variable takes one step of the state counter when the goal is
/// applied.
#[macro_export]
macro_rules! fresh {
    (($($x:ident),*), $($g:expr),* $(,)?) => {
        move |s: $crate::prelude::State| {
            $( let ($x, s) = s.fresh(); )*
            $crate::prelude::Goal::apply(&$crate::conj!($($g),*), s)
        }
    }
}

/// Creates a goal that succeeds if any of its *lines* succeeds.
/// Every successful *line* contributes one or more values.
///
/// A *line* (separated by `;`) succeeds if all of its
/// goals (separated by `,`) succeed.
#[macro_export]
macro_rules! conde {
    ( $($($g:expr),+);+ $(;)? ) => {
        $crate::disj!($($crate::conj!( $($g),+));+)
    }
}

/// Creates a goal that succeeds if any of its *lines* succeeds.
/// Only the first *line* whose first goal succeeds can contribute values.
///
/// A *line* (separated by `;`) succeeds if all of its
/// goals (separated by `,`) succeed.
#[macro_export]
macro_rules! conda {
    ($($g:expr),+ $(;)?) => { $crate::conj!($($g),+) };

    ($g0:expr $(, $g:expr)*; $($rest:tt)+) => {
        $crate::prelude::ifte($g0, $crate::conj!($($g),*), $crate::conda!($($rest)+))
    };
}

/// `Condu!` behaves like `conda!`, except that a successful line
/// succeeds only once.
#[macro_export]
macro_rules! condu {
    ( $($g0:expr $(, $g:expr)*);+ $(;)? ) => {
        $crate::conda!($($crate::prelude::once($g0) $(, $g)*);+)
    }
}
