//! Shared interface of risk components.
//!
//! Every component that contributes to a portfolio optimization problem, whether
//! it estimates risk or only restricts the weights, implements [`Model`]. The
//! problem assembler works against `&dyn Model` and never needs to know which
//! concrete component it holds.

use std::collections::{BTreeMap, HashMap};

use crate::error::Result;
use crate::modeling::{Constraint, Expression, Parameter, Variable};

/// A risk component of a portfolio optimization problem.
pub trait Model {
    /// Named parameters owned by this component.
    ///
    /// The assembler uses this map for introspection, e.g. to report the
    /// values currently bound into the problem.
    fn parameter(&self) -> &BTreeMap<String, Parameter>;

    /// Assign new values to the component's parameters, keyed by parameter name.
    ///
    /// # Arguments
    ///
    /// * `values` - Numeric sequences keyed by parameter name
    ///
    /// # Returns
    ///
    /// * `Ok(())` once every owned parameter holds its new value, or an error if
    ///   a key is unknown or a sequence does not fit its parameter
    fn update_values(&mut self, values: &HashMap<String, Vec<f64>>) -> Result<()>;

    /// Constraints this component imposes on `weights`.
    ///
    /// The default implementation imposes none.
    fn constraints(&self, _weights: &Variable) -> Result<Vec<Constraint>> {
        Ok(Vec::new())
    }

    /// Risk of the portfolio `weights` as a symbolic expression.
    fn estimate(&self, weights: &Variable) -> Result<Expression>;
}
