//! Numeric assignments of variables used when evaluating constraints and expressions

use crate::error::{CvxRiskError, Result};
use crate::modeling::variable::Variable;
use ndarray::Array1;
use std::collections::HashMap;

/// Trait for providing variable values during evaluation
pub trait EvaluationContext {
    /// Get the value of a variable
    fn get_variable(&self, name: &str) -> Result<Array1<f64>>;

    /// Get the value of `variable`, checking that its length matches
    fn value_of(&self, variable: &Variable) -> Result<Array1<f64>> {
        let value = self.get_variable(variable.name())?;
        if value.len() != variable.size() {
            return Err(CvxRiskError::DimensionMismatch(format!(
                "variable '{}' has length {}, context holds a value of length {}",
                variable.name(),
                variable.size(),
                value.len()
            )));
        }
        Ok(value)
    }
}

/// Simple implementation of EvaluationContext using a HashMap
#[derive(Debug, Clone, Default)]
pub struct SimpleContext {
    /// Map of variable names to values
    variables: HashMap<String, Array1<f64>>,
}

impl SimpleContext {
    /// Create a new empty context
    pub fn new() -> Self {
        Self {
            variables: HashMap::new(),
        }
    }

    /// Set a variable value
    pub fn set_variable(&mut self, name: &str, value: Array1<f64>) {
        self.variables.insert(name.to_string(), value);
    }

    /// Set the value of `variable`
    pub fn assign(&mut self, variable: &Variable, value: Array1<f64>) {
        self.set_variable(variable.name(), value);
    }
}

impl EvaluationContext for SimpleContext {
    fn get_variable(&self, name: &str) -> Result<Array1<f64>> {
        self.variables.get_variable(name)
    }
}

impl EvaluationContext for HashMap<String, Array1<f64>> {
    fn get_variable(&self, name: &str) -> Result<Array1<f64>> {
        self.get(name)
            .cloned()
            .ok_or_else(|| CvxRiskError::VariableNotFound(name.to_string()))
    }
}
