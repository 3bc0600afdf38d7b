//! Worked scenarios for `Bounds`

use crate::test_helpers::{assert_values, context_with};
use cvxrisk_rs::modeling::{ConstraintType, Variable};
use cvxrisk_rs::{Bounds, CvxRiskError, Model};

#[test]
fn test_partial_lower_bound_is_zero_padded() {
    let weights = Variable::new("weights", 3);
    let mut bounds = Bounds::new(3, "assets").unwrap();
    bounds.update(&[0.1, 0.2], &[0.3, 0.4, 0.5]).unwrap();

    assert_values(
        &bounds.parameter()["lower_assets"].value().unwrap(),
        &[0.1, 0.2, 0.0],
    );
    assert_values(
        &bounds.parameter()["upper_assets"].value().unwrap(),
        &[0.3, 0.4, 0.5],
    );

    let constraints = bounds.constraints(&weights).unwrap();
    assert_eq!(constraints.len(), 2);
    assert_eq!(
        constraints[0].constraint_type(),
        ConstraintType::GreaterThanOrEqual
    );
    assert_eq!(constraints[0].bound().name(), "lower_assets");
    assert_eq!(constraints[1].constraint_type(), ConstraintType::LessThanOrEqual);
    assert_eq!(constraints[1].bound().name(), "upper_assets");
}

#[test]
fn test_empty_lower_bound() {
    let mut bounds = Bounds::new(3, "assets").unwrap();
    bounds.update(&[], &[1.0, 1.0, 1.0]).unwrap();

    assert_values(&bounds.lower().value().unwrap(), &[0.0, 0.0, 0.0]);
    assert_values(&bounds.upper().value().unwrap(), &[1.0, 1.0, 1.0]);
}

#[test]
fn test_estimate_fails() {
    let weights = Variable::new("weights", 2);
    let bounds = Bounds::new(2, "assets").unwrap();

    match bounds.estimate(&weights) {
        Err(CvxRiskError::UnsupportedOperation(msg)) => assert!(msg.contains("assets")),
        other => panic!("Expected UnsupportedOperation, got {:?}", other),
    }

    // Any argument, any state
    let mut bounds = bounds;
    bounds.update(&[0.0, 0.0], &[1.0, 1.0]).unwrap();
    assert!(bounds.estimate(&Variable::new("other", 7)).is_err());
}

#[test]
fn test_oversize_lower_bound() {
    let mut bounds = Bounds::new(4, "assets").unwrap();
    let result = bounds.update(&[0.5, 0.5, 0.5, 0.5, 0.5], &[1.0, 1.0, 1.0, 1.0]);

    assert!(matches!(result, Err(CvxRiskError::DimensionMismatch(_))));
    assert!(bounds.lower().value().is_none());
    assert!(bounds.upper().value().is_none());
}

#[test]
fn test_zero_padding_pins_unlisted_assets() {
    // Only the first two assets are listed; the third is forced to zero weight
    let weights = Variable::new("weights", 3);
    let mut bounds = Bounds::new(3, "assets").unwrap();
    bounds.update(&[0.0, 0.0], &[1.0, 1.0]).unwrap();
    let constraints = bounds.constraints(&weights).unwrap();

    let inside = context_with(&weights, &[0.6, 0.4, 0.0]);
    assert!(constraints.iter().all(|c| c.is_satisfied(&inside).unwrap()));

    let outside = context_with(&weights, &[0.5, 0.4, 0.1]);
    assert!(!constraints[1].is_satisfied(&outside).unwrap());
    approx::assert_abs_diff_eq!(constraints[1].violation(&outside).unwrap(), 0.1, epsilon = 1e-12);

    // A short lower bound rules out shorting the unlisted asset
    let short = context_with(&weights, &[0.6, 0.5, -0.1]);
    assert!(!constraints[0].is_satisfied(&short).unwrap());
}

#[test]
fn test_problem_is_resolved_with_new_values() {
    let weights = Variable::new("weights", 2);
    let mut bounds = Bounds::new(2, "assets").unwrap();
    let constraints = bounds.constraints(&weights).unwrap();
    let context = context_with(&weights, &[0.7, 0.3]);

    // Built but never bound
    assert!(matches!(
        constraints[0].slack(&context),
        Err(CvxRiskError::UndefinedValue(_))
    ));

    bounds.update(&[0.0, 0.0], &[0.5, 0.5]).unwrap();
    assert!(!constraints[1].is_satisfied(&context).unwrap());

    bounds.update(&[0.0, 0.0], &[0.8, 0.8]).unwrap();
    assert!(constraints[1].is_satisfied(&context).unwrap());

    bounds.update(&[0.4, 0.4], &[0.8, 0.8]).unwrap();
    assert!(!constraints[0].is_satisfied(&context).unwrap());
}

#[test]
fn test_weights_of_wrong_length() {
    let bounds = Bounds::new(3, "assets").unwrap();
    let result = bounds.constraints(&Variable::new("weights", 2));
    assert!(matches!(result, Err(CvxRiskError::DimensionMismatch(_))));
}

#[test]
fn test_two_groups_on_one_weight_vector() {
    let weights = Variable::new("weights", 3);
    let mut assets = Bounds::new(3, "assets").unwrap();
    let mut sectors = Bounds::new(3, "sectors").unwrap();
    assets.update(&[0.0, 0.0, 0.0], &[1.0, 1.0, 1.0]).unwrap();
    sectors.update(&[0.1, 0.1, 0.1], &[0.5, 0.5, 0.5]).unwrap();

    let mut all = assets.constraints(&weights).unwrap();
    all.extend(sectors.constraints(&weights).unwrap());
    assert_eq!(all.len(), 4);

    let context = context_with(&weights, &[0.6, 0.2, 0.2]);
    let violated: Vec<String> = all
        .iter()
        .filter(|c| !c.is_satisfied(&context).unwrap())
        .map(|c| c.to_string())
        .collect();
    assert_eq!(violated, vec!["weights <= upper_sectors".to_string()]);
}
