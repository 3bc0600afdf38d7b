//! Tests for the shared `Model` interface
//!
//! A small expected-return model stands in for the estimators that share the
//! interface with `Bounds`.

use std::collections::{BTreeMap, HashMap};

use crate::test_helpers::context_with;
use cvxrisk_rs::modeling::{Constraint, Expression, Parameter, Variable};
use cvxrisk_rs::{Bounds, CvxRiskError, Model, Result};

/// Expected return `mu' * weights`
struct ExpectedReturn {
    parameter: BTreeMap<String, Parameter>,
    mu: Parameter,
}

impl ExpectedReturn {
    fn new(m: usize) -> Self {
        let mu = Parameter::new("mu", m);
        let mut parameter = BTreeMap::new();
        parameter.insert("mu".to_string(), mu.clone());
        Self { parameter, mu }
    }
}

impl Model for ExpectedReturn {
    fn parameter(&self) -> &BTreeMap<String, Parameter> {
        &self.parameter
    }

    fn update_values(&mut self, values: &HashMap<String, Vec<f64>>) -> Result<()> {
        let mu = values
            .get("mu")
            .ok_or_else(|| CvxRiskError::InvalidInput("mu is required".to_string()))?;
        self.mu.set_value(mu.clone().into())
    }

    fn estimate(&self, weights: &Variable) -> Result<Expression> {
        Expression::linear(&self.mu, weights)
    }
}

fn components(m: usize) -> Vec<Box<dyn Model>> {
    vec![
        Box::new(ExpectedReturn::new(m)),
        Box::new(Bounds::new(m, "assets").unwrap()),
    ]
}

#[test]
fn test_dispatch_through_trait_objects() {
    let weights = Variable::new("weights", 3);
    let models = components(3);

    let constraints: Vec<Constraint> = models
        .iter()
        .flat_map(|m| m.constraints(&weights).unwrap())
        .collect();

    // The estimator imposes none, the bound group exactly two
    assert_eq!(constraints.len(), 2);

    let estimates: Vec<bool> = models.iter().map(|m| m.estimate(&weights).is_ok()).collect();
    assert_eq!(estimates, vec![true, false]);
}

#[test]
fn test_keyed_updates() {
    let weights = Variable::new("weights", 3);
    let mut models = components(3);

    let mut values = HashMap::new();
    values.insert("mu".to_string(), vec![0.1, 0.2, 0.3]);
    models[0].update_values(&values).unwrap();

    let mut values = HashMap::new();
    values.insert("lower_assets".to_string(), vec![0.2]);
    values.insert("upper_assets".to_string(), vec![0.5, 0.5, 0.5]);
    models[1].update_values(&values).unwrap();

    let report: Vec<(String, Option<Vec<f64>>)> = models
        .iter()
        .flat_map(|m| m.parameter().iter())
        .map(|(k, p)| (k.clone(), p.value().map(|v| v.to_vec())))
        .collect();
    assert_eq!(
        report,
        vec![
            ("mu".to_string(), Some(vec![0.1, 0.2, 0.3])),
            ("lower_assets".to_string(), Some(vec![0.2, 0.0, 0.0])),
            ("upper_assets".to_string(), Some(vec![0.5, 0.5, 0.5])),
        ]
    );

    let context = context_with(&weights, &[0.4, 0.3, 0.3]);
    let expected_return = models[0].estimate(&weights).unwrap();
    approx::assert_abs_diff_eq!(
        expected_return.evaluate(&context).unwrap(),
        0.19,
        epsilon = 1e-12
    );

    let constraints = models[1].constraints(&weights).unwrap();
    assert!(constraints.iter().all(|c| c.is_satisfied(&context).unwrap()));
}

#[test]
fn test_unknown_key_is_rejected() {
    let mut bounds = Bounds::new(2, "assets").unwrap();
    let mut values = HashMap::new();
    values.insert("lower_sectors".to_string(), vec![0.1]);

    let model: &mut dyn Model = &mut bounds;
    assert!(matches!(
        model.update_values(&values),
        Err(CvxRiskError::UnknownParameter(_))
    ));
    assert!(!bounds.lower().is_assigned());
}
