//! Declarative description of a bound group.
//!
//! A [`BoundsConfig`] is what a configuration file or upstream service hands
//! over: a name, the universe size and the current limits. [`BoundsConfig::build`]
//! turns it into a populated [`Bounds`].

use serde::{Deserialize, Serialize};

use crate::bounds::Bounds;
use crate::error::Result;

/// Configuration for a single bound group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoundsConfig {
    /// Name of the bound group. Default: "assets"
    #[serde(default = "default_name")]
    pub name: String,

    /// Size of the asset universe.
    pub m: usize,

    /// Lower limits, padded with zeros up to `m`. Default: empty
    #[serde(default)]
    pub lower: Vec<f64>,

    /// Upper limits, padded with zeros up to `m`. Default: empty
    #[serde(default)]
    pub upper: Vec<f64>,
}

fn default_name() -> String {
    "assets".to_string()
}

impl BoundsConfig {
    /// Create a configuration with no limits set.
    pub fn new(name: &str, m: usize) -> Self {
        Self {
            name: name.to_string(),
            m,
            lower: Vec::new(),
            upper: Vec::new(),
        }
    }

    /// Set the lower limits.
    pub fn with_lower(mut self, lower: Vec<f64>) -> Self {
        self.lower = lower;
        self
    }

    /// Set the upper limits.
    pub fn with_upper(mut self, upper: Vec<f64>) -> Self {
        self.upper = upper;
        self
    }

    /// Parse a configuration from JSON.
    ///
    /// # Examples
    ///
    /// ```
    /// use cvxrisk_rs::config::BoundsConfig;
    ///
    /// let config = BoundsConfig::from_json(r#"{ "m": 3, "upper": [0.5, 0.5, 0.5] }"#).unwrap();
    /// assert_eq!(config.name, "assets");
    /// assert!(config.lower.is_empty());
    ///
    /// let bounds = config.build().unwrap();
    /// assert_eq!(bounds.lower().value().unwrap().to_vec(), vec![0.0, 0.0, 0.0]);
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        let config = serde_json::from_str(json)?;
        Ok(config)
    }

    /// Serialize the configuration to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        let json = serde_json::to_string_pretty(self)?;
        Ok(json)
    }

    /// Construct the bound group and assign the configured limits.
    pub fn build(&self) -> Result<Bounds> {
        let mut bounds = Bounds::new(self.m, &self.name)?;
        bounds.update(&self.lower, &self.upper)?;
        Ok(bounds)
    }
}
