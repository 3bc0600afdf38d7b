//! Late-bound vector parameters
//!
//! A [`Parameter`] is a named placeholder for a numeric vector. It is placed into
//! constraints and expressions when the optimization problem is assembled, and its
//! value can be replaced afterwards without rebuilding that structure.

use crate::error::{CvxRiskError, Result};
use ndarray::Array1;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// A named vector parameter with a shared, initially undefined value
///
/// Cloning a `Parameter` clones the handle, not the value: all clones read and
/// write the same cell. Constraints keep such clones, so assigning a new value to
/// the parameter changes how every previously built constraint evaluates.
#[derive(Clone)]
pub struct Parameter {
    /// Name of the parameter
    name: String,

    /// Fixed length of the vector value
    size: usize,

    /// Current value, `None` until assigned
    value: Rc<RefCell<Option<Array1<f64>>>>,
}

impl Parameter {
    /// Create a parameter of the given length with no value
    ///
    /// # Examples
    ///
    /// ```
    /// use cvxrisk_rs::modeling::Parameter;
    ///
    /// let param = Parameter::new("lower_assets", 3);
    /// assert_eq!(param.name(), "lower_assets");
    /// assert_eq!(param.size(), 3);
    /// assert!(param.value().is_none());
    /// ```
    pub fn new(name: &str, size: usize) -> Self {
        Self {
            name: name.to_string(),
            size,
            value: Rc::new(RefCell::new(None)),
        }
    }

    /// Get the name of the parameter
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the length of the parameter
    pub fn size(&self) -> usize {
        self.size
    }

    /// Get a copy of the current value, if one has been assigned
    pub fn value(&self) -> Option<Array1<f64>> {
        self.value.borrow().clone()
    }

    /// Check whether a value has been assigned
    pub fn is_assigned(&self) -> bool {
        self.value.borrow().is_some()
    }

    /// Get the current value or fail with [`CvxRiskError::UndefinedValue`]
    pub fn require_value(&self) -> Result<Array1<f64>> {
        self.value().ok_or_else(|| {
            CvxRiskError::UndefinedValue(format!(
                "parameter '{}' has no value assigned",
                self.name
            ))
        })
    }

    /// Assign a new value
    ///
    /// The value must have exactly [`Parameter::size`] elements. The write is
    /// visible through every clone of this parameter.
    ///
    /// # Examples
    ///
    /// ```
    /// use cvxrisk_rs::modeling::Parameter;
    /// use ndarray::array;
    ///
    /// let param = Parameter::new("upper_assets", 2);
    /// let handle = param.clone();
    ///
    /// param.set_value(array![0.5, 0.5]).unwrap();
    /// assert_eq!(handle.value().unwrap(), array![0.5, 0.5]);
    ///
    /// assert!(param.set_value(array![1.0]).is_err());
    /// ```
    pub fn set_value(&self, value: Array1<f64>) -> Result<()> {
        if value.len() != self.size {
            return Err(CvxRiskError::DimensionMismatch(format!(
                "parameter '{}' has length {}, got a value of length {}",
                self.name,
                self.size,
                value.len()
            )));
        }

        *self.value.borrow_mut() = Some(value);
        Ok(())
    }

    /// Check whether two handles refer to the same value cell
    pub fn shares_value_with(&self, other: &Parameter) -> bool {
        Rc::ptr_eq(&self.value, &other.value)
    }
}

impl fmt::Debug for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Parameter")
            .field("name", &self.name)
            .field("size", &self.size)
            .field("value", &*self.value.borrow())
            .finish()
    }
}
