//! # Modeling Primitives
//!
//! The symbolic building blocks that risk components hand to an optimization
//! problem assembler.
//!
//! ## Core Components
//!
//! - [`Variable`]: A named symbolic vector, e.g. the portfolio weights
//! - [`Parameter`]: A named vector whose value is bound late and shared by reference
//! - [`Constraint`]: Element-wise inequalities between a variable and a parameter
//! - [`Expression`]: Scalar expressions returned by risk estimates
//! - [`EvaluationContext`]: Supplies numeric variable values when constraints or expressions are evaluated
//!
//! ## Example Usage
//!
//! ```rust
//! use cvxrisk_rs::modeling::{Constraint, ConstraintType, Parameter, SimpleContext, Variable};
//! use ndarray::array;
//!
//! let weights = Variable::new("weights", 2);
//! let cap = Parameter::new("cap", 2);
//! let constraint = Constraint::new(&weights, ConstraintType::LessThanOrEqual, &cap).unwrap();
//!
//! let mut context = SimpleContext::new();
//! context.assign(&weights, array![0.5, 0.5]);
//!
//! // The value is bound after the constraint was built
//! cap.set_value(array![0.6, 0.6]).unwrap();
//! assert!(constraint.is_satisfied(&context).unwrap());
//!
//! cap.set_value(array![0.4, 0.6]).unwrap();
//! assert!(!constraint.is_satisfied(&context).unwrap());
//! ```

pub mod constraints;
pub mod context;
pub mod expression;
pub mod parameter;
pub mod variable;

// Re-export key types
pub use constraints::{Constraint, ConstraintType, FEASIBILITY_TOLERANCE};
pub use context::{EvaluationContext, SimpleContext};
pub use expression::Expression;
pub use parameter::Parameter;
pub use variable::Variable;
