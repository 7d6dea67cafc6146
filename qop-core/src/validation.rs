//! Numeric well-formedness checks for operation matrices
//!
//! Pure, fail-fast validators with no partial success: each either returns
//! `Ok(())` or fails with a single error identifying the offending
//! matrix/matrices. Operations run these at construction time so malformed
//! circuits never reach the evolution engine.

use crate::matrix::{SquareMatrix, Tolerance};
use crate::{OperationError, QubitId, Result};

/// Check that the matrix has the right dimension to act on the targets
///
/// The side length must equal 2^(number of targets). Squareness is already
/// guaranteed by [`SquareMatrix`] construction, which rejects non-square
/// data with [`OperationError::InvalidShape`].
///
/// # Errors
/// Returns [`OperationError::DimensionMismatch`] on a size mismatch, or
/// [`OperationError::InvalidArgument`] when the target tuple is so large
/// that 2^(number of targets) is not representable.
pub fn check_matrix_dimensions(matrix: &SquareMatrix, targets: &[QubitId]) -> Result<()> {
    if targets.len() >= usize::BITS as usize {
        return Err(OperationError::invalid_argument(format!(
            "target tuple of {} qubits exceeds the addressable dimension",
            targets.len()
        )));
    }
    let expected = 1usize << targets.len();
    if matrix.dimension() != expected {
        return Err(OperationError::dimension_mismatch(
            matrix.dimension(),
            expected,
        ));
    }
    Ok(())
}

/// Check that the matrix is unitary, using the default tolerance
///
/// # Errors
/// Returns [`OperationError::NotUnitary`] unless `M · Mᴴ ≈ I`.
pub fn check_unitary(matrix: &SquareMatrix) -> Result<()> {
    check_unitary_with(matrix, Tolerance::DEFAULT)
}

/// Check that the matrix is unitary under an explicit tolerance
pub fn check_unitary_with(matrix: &SquareMatrix, tolerance: Tolerance) -> Result<()> {
    let product = matrix.multiply(&matrix.adjoint());
    if !product.is_identity(tolerance) {
        return Err(OperationError::NotUnitary(matrix.to_string()));
    }
    Ok(())
}

/// Check that the matrix is Hermitian, using the default tolerance
///
/// # Errors
/// Returns [`OperationError::NotHermitian`] unless `M ≈ Mᴴ`.
pub fn check_hermitian(matrix: &SquareMatrix) -> Result<()> {
    check_hermitian_with(matrix, Tolerance::DEFAULT)
}

/// Check that the matrix is Hermitian under an explicit tolerance
pub fn check_hermitian_with(matrix: &SquareMatrix, tolerance: Tolerance) -> Result<()> {
    if !matrix.approx_eq(&matrix.adjoint(), tolerance) {
        return Err(OperationError::NotHermitian(matrix.to_string()));
    }
    Ok(())
}

/// Check that a set of Kraus operators satisfies the CPTP condition
///
/// Computes `E = Σ Mᵢᴴ·Mᵢ` over the set and requires `E ≈ I`. An empty set
/// is rejected: the empty sum has no well-defined identity shape to compare
/// against.
///
/// # Errors
/// Returns [`OperationError::NotCPTP`] for an empty set or a completeness
/// failure, [`OperationError::DimensionMismatch`] if the matrices differ in
/// dimension.
pub fn check_cptp(matrices: &[SquareMatrix]) -> Result<()> {
    check_cptp_with(matrices, Tolerance::DEFAULT)
}

/// Check the CPTP condition under an explicit tolerance
pub fn check_cptp_with(matrices: &[SquareMatrix], tolerance: Tolerance) -> Result<()> {
    let first = matrices
        .first()
        .ok_or_else(|| OperationError::NotCPTP("empty Kraus operator set".to_string()))?;

    let dimension = first.dimension();
    for matrix in &matrices[1..] {
        if matrix.dimension() != dimension {
            return Err(OperationError::dimension_mismatch(
                matrix.dimension(),
                dimension,
            ));
        }
    }

    let mut sum = first.adjoint().multiply(first);
    for matrix in &matrices[1..] {
        sum += &matrix.adjoint().multiply(matrix);
    }

    if !sum.is_identity(tolerance) {
        let rendered: Vec<String> = matrices.iter().map(|m| m.to_string()).collect();
        return Err(OperationError::NotCPTP(rendered.join(", ")));
    }
    Ok(())
}
