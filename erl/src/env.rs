use crate::Float;
use std::collections::HashMap;

/// The variables visible to a program while it runs.
///
/// Erl is not case sensitive, so neither are these names.
#[derive(Debug, Clone, Default)]
pub struct Env {
    vars: HashMap<String, Float>,
}

impl Env {
    /// Creates an empty environment
    pub fn new() -> Self {
        Self::default()
    }

    /// Assigns a variable
    pub fn set(&mut self, name: &str, value: Float) {
        self.vars.insert(name.to_ascii_uppercase(), value);
    }

    /// Reads a variable
    pub fn get(&self, name: &str) -> Option<Float> {
        self.vars.get(&name.to_ascii_uppercase()).copied()
    }

    /// Assigns a variable, returning the environment
    ///
    /// ```
    /// use erl::Env;
    ///
    /// let env = Env::new().with("DayOfYear", 10.).with("ZoneTimeStep", 0.25);
    /// assert_eq!(env.get("dayofyear"), Some(10.));
    /// ```
    pub fn with(mut self, name: &str, value: Float) -> Self {
        self.set(name, value);
        self
    }
}
