//! Error types for operation validation and dispatch

use thiserror::Error;

/// Errors raised while validating matrices or dispatching instructions
///
/// Every variant is a construction-time or validation-time failure. None of
/// them is transient or retryable; a circuit containing one malformed
/// operation is rejected before simulation begins.
#[derive(Debug, Error)]
pub enum OperationError {
    /// No constructor registered for the instruction's kind discriminant
    #[error("instruction kind '{0}' not recognized")]
    UnrecognizedInstruction(String),

    /// Operation value outside the closed Gate/Kraus/Observable set
    #[error("unrecognized operation: {0}")]
    UnrecognizedOperation(String),

    /// Matrix data is not a two-dimensional square matrix
    #[error("not a two-dimensional square matrix: {0}")]
    InvalidShape(String),

    /// Matrix side length does not match 2^(number of target qubits)
    #[error("matrix operates on space of dimension {dimension} instead of {expected}")]
    DimensionMismatch { dimension: usize, expected: usize },

    /// Gate matrix failed the unitarity check
    #[error("matrix is not unitary: {0}")]
    NotUnitary(String),

    /// Observable matrix failed the Hermiticity check
    #[error("matrix is not Hermitian: {0}")]
    NotHermitian(String),

    /// Kraus operator set failed the completeness relation Σ K†K = I
    #[error("matrices do not satisfy CPTP: {0}")]
    NotCPTP(String),

    /// Argument outside the operation's defined domain
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl OperationError {
    /// Create an invalid shape error
    pub fn invalid_shape(detail: impl Into<String>) -> Self {
        Self::InvalidShape(detail.into())
    }

    /// Create a dimension mismatch error
    pub fn dimension_mismatch(dimension: usize, expected: usize) -> Self {
        Self::DimensionMismatch {
            dimension,
            expected,
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument(detail: impl Into<String>) -> Self {
        Self::InvalidArgument(detail.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unrecognized_instruction_message() {
        let err = OperationError::UnrecognizedInstruction("foo".to_string());
        let msg = format!("{}", err);
        assert!(msg.contains("foo"));
        assert!(msg.contains("not recognized"));
    }

    #[test]
    fn test_dimension_mismatch_message() {
        let err = OperationError::dimension_mismatch(4, 2);
        let msg = format!("{}", err);
        assert!(msg.contains("4"));
        assert!(msg.contains("2"));
    }

    #[test]
    fn test_invalid_argument_message() {
        let err = OperationError::invalid_argument("qubit count must be at least 1");
        let msg = format!("{}", err);
        assert!(msg.contains("at least 1"));
    }
}
