//! Symbolic decision vectors

use serde::{Deserialize, Serialize};
use std::fmt;

/// A named symbolic vector, such as the portfolio weights
///
/// A variable carries no numeric value. Values are looked up by name in an
/// [`EvaluationContext`](crate::modeling::EvaluationContext) whenever a
/// constraint or expression referencing it is evaluated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Variable {
    name: String,
    size: usize,
}

impl Variable {
    /// Create a variable with the given name and length
    pub fn new(name: &str, size: usize) -> Self {
        Self {
            name: name.to_string(),
            size,
        }
    }

    /// Get the name of the variable
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the length of the variable
    pub fn size(&self) -> usize {
        self.size
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
