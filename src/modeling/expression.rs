//! Scalar symbolic expressions
//!
//! Risk models return an [`Expression`] from their estimate. The expression
//! keeps references to variables and parameters and is only turned into a
//! number when evaluated against an [`EvaluationContext`].

use crate::error::{CvxRiskError, Result};
use crate::modeling::context::EvaluationContext;
use crate::modeling::parameter::Parameter;
use crate::modeling::variable::Variable;

/// A scalar expression over variables and parameters
#[derive(Debug, Clone)]
pub enum Expression {
    /// Inner product of a parameter vector with a variable
    Linear {
        coefficients: Parameter,
        variable: Variable,
    },
}

impl Expression {
    /// Build the inner product `coefficients' * variable`
    pub fn linear(coefficients: &Parameter, variable: &Variable) -> Result<Self> {
        if coefficients.size() != variable.size() {
            return Err(CvxRiskError::DimensionMismatch(format!(
                "cannot multiply '{}' (length {}) with '{}' (length {})",
                coefficients.name(),
                coefficients.size(),
                variable.name(),
                variable.size()
            )));
        }

        Ok(Self::Linear {
            coefficients: coefficients.clone(),
            variable: variable.clone(),
        })
    }

    /// Evaluate the expression with the given context
    pub fn evaluate<C>(&self, context: &C) -> Result<f64>
    where
        C: EvaluationContext + ?Sized,
    {
        match self {
            Self::Linear {
                coefficients,
                variable,
            } => {
                let coefficients = coefficients.require_value()?;
                let value = context.value_of(variable)?;
                Ok(coefficients.dot(&value))
            }
        }
    }
}
