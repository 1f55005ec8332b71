//! Interleaving search: an infinite branch does not starve its siblings.
//!
//! The driver logs at debug level how many suspensions each run forced.

use micro_kanren::prelude::*;
use micro_kanren::{disj, run};
use tracing::Level;

fn main() {
    tracing_subscriber::fmt().with_max_level(Level::DEBUG).init();

    let answers = run!(5, q, disj!(nevero(); eq(q.clone(), "left"); alwayso(); eq(q, "right")));
    println!("five answers next to a diverging branch: {:?}", answers);

    let lists: Vec<_> = run!(q, membero("x", q)).take(4).collect();
    for l in lists {
        println!("{}", l);
    }

    let states = disj2(nevero(), alwayso()).run(3);
    println!("states: {:?}", states);
}
