//! # cvxrisk-rs
//!
//! `cvxrisk-rs` builds parameterised constraints for convex portfolio
//! optimization problems.
//!
//! The library provides:
//! - [`Bounds`]: named per-asset lower/upper weight limits, bound into a problem
//!   as late-bound parameters so the problem can be re-solved with new limits
//! - The [`Model`] trait shared by every risk component of a problem
//! - Minimal symbolic primitives ([`modeling`]) for variables, parameters,
//!   element-wise constraints and scalar expressions
//! - [`config::BoundsConfig`] for building bound groups from JSON
//!
//! ## Basic Usage
//!
//! ```
//! use cvxrisk_rs::modeling::{SimpleContext, Variable};
//! use cvxrisk_rs::Bounds;
//! use ndarray::array;
//!
//! let weights = Variable::new("weights", 3);
//! let mut bounds = Bounds::new(3, "assets").unwrap();
//!
//! // Build the constraints once...
//! let constraints = bounds.constraints(&weights).unwrap();
//! assert_eq!(constraints.len(), 2);
//!
//! // ...and bind values later. The lower bound is padded to [0.1, 0.2, 0.0].
//! bounds.update(&[0.1, 0.2], &[0.5, 0.5, 0.5]).unwrap();
//!
//! let mut context = SimpleContext::new();
//! context.assign(&weights, array![0.3, 0.3, 0.4]);
//! assert!(constraints.iter().all(|c| c.is_satisfied(&context).unwrap()));
//! ```

// Public modules
pub mod error;

pub mod modeling;

pub mod model;

pub mod bounds;

pub mod config;

// Re-exports for convenience
pub use bounds::{Bounds, BoundsSnapshot};
pub use error::{CvxRiskError, Result};
pub use model::Model;

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
