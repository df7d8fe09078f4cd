use thiserror::Error;

/// Top-level error type for the planigon geometry kernel.
#[derive(Debug, Error)]
pub enum PlanigonError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors related to geometry values.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("{operation} does not support the {variant} variant")]
    UnsupportedVariant {
        operation: &'static str,
        variant: &'static str,
    },
}

/// Errors related to geometric operations.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("algorithmic invariant violated: {0}")]
    InvariantViolation(String),
}

/// Convenience type alias for results using [`PlanigonError`].
pub type Result<T> = std::result::Result<T, PlanigonError>;
