use std::sync::Arc;

/// Named logic variable.
///
/// Variables are identified by their name: two variables with the
/// same name are the same variable. Variables introduced during
/// search are named after the state counter (see [`Var::fresh`]).
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Var {
    name: Arc<str>,
}

impl Var {
    /// Create a logic variable with the given name.
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Var { name: name.into() }
    }

    /// The variable allocated for counter value `n`.
    pub fn fresh(n: usize) -> Self {
        Var::new(format!("v{}", n))
    }

    /// Return the variable's name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl From<&str> for Var {
    fn from(name: &str) -> Self {
        Var::new(name)
    }
}

impl std::fmt::Debug for Var {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl std::fmt::Display for Var {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, ",{}", self.name)
    }
}
