//! Element-wise inequality constraints between a variable and a parameter
//!
//! A [`Constraint`] relates every component of a symbolic [`Variable`] to the
//! matching component of a [`Parameter`]. The parameter is read when the
//! constraint is evaluated, not when it is built, so constraints stay valid
//! across any number of parameter updates.

use crate::error::{CvxRiskError, Result};
use crate::modeling::context::EvaluationContext;
use crate::modeling::parameter::Parameter;
use crate::modeling::variable::Variable;
use ndarray::{Array1, Zip};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Slack below which a component is still considered feasible
pub const FEASIBILITY_TOLERANCE: f64 = 1e-9;

/// Type of constraint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConstraintType {
    /// Less than or equal to (<=)
    LessThanOrEqual,

    /// Greater than or equal to (>=)
    GreaterThanOrEqual,
}

impl ConstraintType {
    /// Convert the constraint type to a string operator
    pub fn as_operator(&self) -> &'static str {
        match self {
            Self::LessThanOrEqual => "<=",
            Self::GreaterThanOrEqual => ">=",
        }
    }

    /// Slack of `lhs <op> rhs`, non-negative exactly when the relation holds
    pub fn slack(&self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::LessThanOrEqual => rhs - lhs,
            Self::GreaterThanOrEqual => lhs - rhs,
        }
    }
}

/// An element-wise inequality `variable <op> bound`
///
/// One `Constraint` covers all components of the variable.
#[derive(Debug, Clone)]
pub struct Constraint {
    variable: Variable,
    constraint_type: ConstraintType,
    bound: Parameter,
}

impl Constraint {
    /// Create a new constraint between a variable and a parameter of the same length
    pub fn new(
        variable: &Variable,
        constraint_type: ConstraintType,
        bound: &Parameter,
    ) -> Result<Self> {
        if variable.size() != bound.size() {
            return Err(CvxRiskError::DimensionMismatch(format!(
                "cannot constrain '{}' (length {}) by '{}' (length {})",
                variable.name(),
                variable.size(),
                bound.name(),
                bound.size()
            )));
        }

        Ok(Self {
            variable: variable.clone(),
            constraint_type,
            bound: bound.clone(),
        })
    }

    /// Get the constrained variable
    pub fn variable(&self) -> &Variable {
        &self.variable
    }

    /// Get the type of constraint
    pub fn constraint_type(&self) -> ConstraintType {
        self.constraint_type
    }

    /// Get the bounding parameter
    pub fn bound(&self) -> &Parameter {
        &self.bound
    }

    /// Number of scalar inequalities this constraint stands for
    pub fn size(&self) -> usize {
        self.variable.size()
    }

    /// Evaluate the element-wise slack of the constraint
    ///
    /// Each component is non-negative when that component satisfies the
    /// inequality. Fails with [`CvxRiskError::UndefinedValue`] if the bounding
    /// parameter has never been assigned.
    pub fn slack<C>(&self, context: &C) -> Result<Array1<f64>>
    where
        C: EvaluationContext + ?Sized,
    {
        let bound = self.bound.require_value()?;
        let value = context.value_of(&self.variable)?;

        let mut slack = Array1::zeros(self.size());
        Zip::from(&mut slack)
            .and(&value)
            .and(&bound)
            .for_each(|s, &lhs, &rhs| *s = self.constraint_type.slack(lhs, rhs));
        Ok(slack)
    }

    /// Largest amount by which any component violates the constraint, zero if feasible
    pub fn violation<C>(&self, context: &C) -> Result<f64>
    where
        C: EvaluationContext + ?Sized,
    {
        let slack = self.slack(context)?;
        Ok(slack.iter().fold(0.0_f64, |worst, &s| worst.max(-s)))
    }

    /// Check if the constraint is satisfied
    pub fn is_satisfied<C>(&self, context: &C) -> Result<bool>
    where
        C: EvaluationContext + ?Sized,
    {
        Ok(self.violation(context)? <= FEASIBILITY_TOLERANCE)
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.variable.name(),
            self.constraint_type.as_operator(),
            self.bound.name()
        )
    }
}
