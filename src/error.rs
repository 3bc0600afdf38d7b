use thiserror::Error;

/// Error types for the cvxrisk-rs library.
#[derive(Error, Debug)]
pub enum CvxRiskError {
    /// Error indicating a mismatch in vector dimensions.
    #[error("Dimension mismatch: {0}")]
    DimensionMismatch(String),

    /// The operation is not provided by this kind of model.
    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),

    /// A parameter was read before any value was assigned to it.
    #[error("Undefined value: {0}")]
    UndefinedValue(String),

    /// Invalid input data.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A keyed update named a parameter the model does not own.
    #[error("Unknown parameter: {0}")]
    UnknownParameter(String),

    /// The evaluation context holds no value for a variable.
    #[error("Variable not found: {0}")]
    VariableNotFound(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Result type alias for cvxrisk-rs operations.
pub type Result<T> = std::result::Result<T, CvxRiskError>;
