//! Per-asset lower and upper bounds on portfolio weights
//!
//! This module provides [`Bounds`], a named bound group that injects its limits
//! into an optimization problem as two late-bound parameters. The problem is
//! built once with the constraints from [`Bounds::constraints`]; new limits are
//! then pushed in with [`Bounds::update`] before every re-solve.
//!
//! Bound vectors shorter than the asset universe are accepted and padded with
//! zeros. For the lower bound this is a real restriction: padded assets are
//! held at non-negative weight, and at exactly zero weight when the upper bound
//! is padded as well.

use std::collections::{BTreeMap, HashMap};

use ndarray::{s, Array1, ArrayView1};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::{CvxRiskError, Result};
use crate::model::Model;
use crate::modeling::{Constraint, ConstraintType, Expression, Parameter, Variable};

/// Extend `values` to length `m` by appending zeros; `values.len() <= m`
fn pad_with_zeros(values: &[f64], m: usize) -> Array1<f64> {
    let mut padded = Array1::zeros(m);
    padded
        .slice_mut(s![..values.len()])
        .assign(&ArrayView1::from(values));
    padded
}

/// A named group of per-asset lower and upper weight limits
///
/// The group owns two parameters of length `m`, keyed `lower_<name>` and
/// `upper_<name>`. Both start without a value.
#[derive(Debug)]
pub struct Bounds {
    /// Size of the asset universe
    m: usize,

    /// Name of the bound group
    name: String,

    /// The two parameters, keyed by parameter name
    parameter: BTreeMap<String, Parameter>,

    lower: Parameter,
    upper: Parameter,
}

impl Bounds {
    /// Create a bound group for `m` assets
    ///
    /// # Arguments
    ///
    /// * `m` - Number of assets, must be positive
    /// * `name` - Name of the group, must not be empty
    ///
    /// # Examples
    ///
    /// ```
    /// use cvxrisk_rs::Bounds;
    ///
    /// let bounds = Bounds::new(3, "assets").unwrap();
    /// assert!(bounds.parameter().contains_key("lower_assets"));
    /// assert!(bounds.parameter().contains_key("upper_assets"));
    /// assert!(bounds.lower().value().is_none());
    /// ```
    pub fn new(m: usize, name: &str) -> Result<Self> {
        if m == 0 {
            return Err(CvxRiskError::InvalidInput(format!(
                "bound group '{}' needs at least one asset",
                name
            )));
        }
        if name.is_empty() {
            return Err(CvxRiskError::InvalidInput(
                "bound group name must not be empty".to_string(),
            ));
        }

        let lower = Parameter::new(&format!("lower_{}", name), m);
        let upper = Parameter::new(&format!("upper_{}", name), m);

        let mut parameter = BTreeMap::new();
        parameter.insert(lower.name().to_string(), lower.clone());
        parameter.insert(upper.name().to_string(), upper.clone());

        debug!(name, m, "created bound group");

        Ok(Self {
            m,
            name: name.to_string(),
            parameter,
            lower,
            upper,
        })
    }

    /// Get the size of the asset universe
    pub fn m(&self) -> usize {
        self.m
    }

    /// Get the name of the bound group
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the parameters, keyed `lower_<name>` and `upper_<name>`
    pub fn parameter(&self) -> &BTreeMap<String, Parameter> {
        &self.parameter
    }

    /// Key of the lower bound parameter
    pub fn lower_key(&self) -> &str {
        self.lower.name()
    }

    /// Key of the upper bound parameter
    pub fn upper_key(&self) -> &str {
        self.upper.name()
    }

    /// The lower bound parameter
    pub fn lower(&self) -> &Parameter {
        &self.lower
    }

    /// The upper bound parameter
    pub fn upper(&self) -> &Parameter {
        &self.upper
    }

    /// Assign new lower and upper limits
    ///
    /// Each sequence may be shorter than `m`; missing trailing entries become
    /// `0.0`. A sequence longer than `m` fails with
    /// [`CvxRiskError::DimensionMismatch`] and leaves both parameters unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use cvxrisk_rs::Bounds;
    /// use ndarray::array;
    ///
    /// let mut bounds = Bounds::new(3, "assets").unwrap();
    /// bounds.update(&[0.1, 0.2], &[0.3, 0.4, 0.5]).unwrap();
    ///
    /// assert_eq!(bounds.lower().value().unwrap(), array![0.1, 0.2, 0.0]);
    /// assert_eq!(bounds.upper().value().unwrap(), array![0.3, 0.4, 0.5]);
    /// ```
    pub fn update(&mut self, lower: &[f64], upper: &[f64]) -> Result<()> {
        let lower_values = self.fit(self.lower_key(), lower)?;
        let upper_values = self.fit(self.upper_key(), upper)?;

        debug!(
            name = %self.name,
            m = self.m,
            lower_len = lower.len(),
            upper_len = upper.len(),
            "updating bounds"
        );

        self.lower.set_value(lower_values)?;
        self.upper.set_value(upper_values)?;
        Ok(())
    }

    /// Pad `values` to length `m`, rejecting sequences that do not fit
    fn fit(&self, key: &str, values: &[f64]) -> Result<Array1<f64>> {
        if values.len() > self.m {
            return Err(CvxRiskError::DimensionMismatch(format!(
                "'{}' holds {} assets, got {} values",
                key,
                self.m,
                values.len()
            )));
        }
        Ok(pad_with_zeros(values, self.m))
    }

    /// Element-wise constraints `weights >= lower` and `weights <= upper`
    ///
    /// Exactly two constraints are returned, lower first. They refer to the live
    /// parameters, so values assigned by a later [`Bounds::update`] apply to them.
    /// Fails with [`CvxRiskError::DimensionMismatch`] if `weights` does not have
    /// length `m`.
    pub fn constraints(&self, weights: &Variable) -> Result<Vec<Constraint>> {
        if weights.size() != self.m {
            return Err(CvxRiskError::DimensionMismatch(format!(
                "bound group '{}' holds {} assets, weights '{}' have length {}",
                self.name,
                self.m,
                weights.name(),
                weights.size()
            )));
        }

        trace!(name = %self.name, weights = %weights, "building bound constraints");

        Ok(vec![
            Constraint::new(weights, ConstraintType::GreaterThanOrEqual, &self.lower)?,
            Constraint::new(weights, ConstraintType::LessThanOrEqual, &self.upper)?,
        ])
    }

    /// Report of the values currently bound into the parameters
    pub fn snapshot(&self) -> BoundsSnapshot {
        BoundsSnapshot {
            name: self.name.clone(),
            m: self.m,
            lower: self.lower.value().map(|v| v.to_vec()),
            upper: self.upper.value().map(|v| v.to_vec()),
        }
    }

    /// Serialize [`Bounds::snapshot`] to pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        let json = serde_json::to_string_pretty(&self.snapshot())?;
        Ok(json)
    }
}

impl Model for Bounds {
    fn parameter(&self) -> &BTreeMap<String, Parameter> {
        &self.parameter
    }

    /// Keys must be `lower_<name>` or `upper_<name>`; a missing key counts as
    /// an empty sequence and so pads to all zeros.
    fn update_values(&mut self, values: &HashMap<String, Vec<f64>>) -> Result<()> {
        if let Some(unknown) = values.keys().find(|k| !self.parameter.contains_key(*k)) {
            return Err(CvxRiskError::UnknownParameter(format!(
                "'{}' is not a parameter of bound group '{}'",
                unknown, self.name
            )));
        }

        let lower = values
            .get(self.lower_key())
            .map(Vec::as_slice)
            .unwrap_or(&[]);
        let upper = values
            .get(self.upper_key())
            .map(Vec::as_slice)
            .unwrap_or(&[]);

        self.update(lower, upper)
    }

    fn constraints(&self, weights: &Variable) -> Result<Vec<Constraint>> {
        Bounds::constraints(self, weights)
    }

    fn estimate(&self, _weights: &Variable) -> Result<Expression> {
        Err(CvxRiskError::UnsupportedOperation(format!(
            "bound group '{}' does not estimate risk",
            self.name
        )))
    }
}

/// Serializable report of a bound group's current values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoundsSnapshot {
    /// Name of the bound group
    pub name: String,

    /// Size of the asset universe
    pub m: usize,

    /// Current lower limits, `None` before the first update
    pub lower: Option<Vec<f64>>,

    /// Current upper limits, `None` before the first update
    pub upper: Option<Vec<f64>>,
}
