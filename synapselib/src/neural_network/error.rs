use thiserror::Error;

pub type NetworkResult<T> = Result<T, NetworkError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Errors returned by the neural network computations.
///
/// All of them are precondition violations detected at the
/// point of the offending call. Nothing is retried internally.
pub enum NetworkError {
    /// Dot product was requested for vectors of different sizes.
    #[error("Vectors should have the same dimensions: {left} and {right}")]
    DimensionMismatch {
        left: usize,
        right: usize
    },

    /// Required argument was not provided.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String)
}

impl NetworkError {
    #[inline]
    pub(crate) fn input_missing() -> Self {
        Self::InvalidArgument(String::from("input missing"))
    }

    #[inline]
    pub(crate) fn activation_function_missing() -> Self {
        Self::InvalidArgument(String::from("activation function missing"))
    }
}
