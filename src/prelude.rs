pub use crate::{
    core::{
        goal::{run_goal, Goal, Limit},
        logic_variable::Var,
        pair::Pair,
        parse::{parse, ParseError},
        reify::{reify, reify_name, reify_var},
        state::State,
        stream::Stream,
        substitution::Substitution,
        term::Term,
    },
    goals::{combinators::*, list::*, primitive::*},
};
