//! Strongly-typed circuit operations and the matrix accessor
//!
//! Three concrete operation kinds exist: unitary gates, Kraus noise
//! channels, and observables. Each validates its backing matrix or matrices
//! at construction, so a value of one of these types is always numerically
//! well-formed.

use crate::matrix::SquareMatrix;
use crate::validation::{check_cptp, check_matrix_dimensions, check_unitary};
use crate::{OperationError, QubitId, Result};
use smallvec::SmallVec;
use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// Trait for operations produced by instruction dispatch
///
/// The set of concrete implementations consumed by the evolution engine is
/// closed over [`GateOperation`], [`KrausOperation`] and [`Observable`];
/// [`get_matrix`] rejects anything else. New instruction kinds extend the
/// dispatch registry, not this variant set.
pub trait Operation: Send + Sync + fmt::Debug {
    /// The ordered target qubits this operation acts on
    fn targets(&self) -> &[QubitId];

    /// Upcast for closed dispatch in [`get_matrix`]
    fn as_any(&self) -> &dyn Any;
}

/// A unitary gate acting on an ordered tuple of target qubits
///
/// # Example
/// ```
/// use qop_core::{GateOperation, QubitId, SquareMatrix};
///
/// let gate = GateOperation::new(SquareMatrix::identity(2), &[QubitId::new(0)]).unwrap();
/// assert_eq!(gate.matrix().dimension(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct GateOperation {
    matrix: SquareMatrix,
    targets: SmallVec<[QubitId; 2]>, // Most gates are 1-2 qubits
}

impl GateOperation {
    /// Create a gate operation, validating the matrix
    ///
    /// # Errors
    /// Returns [`OperationError::DimensionMismatch`] if the matrix side
    /// length is not 2^(number of targets), [`OperationError::NotUnitary`]
    /// if the matrix fails the unitarity check.
    pub fn new(matrix: SquareMatrix, targets: &[QubitId]) -> Result<Self> {
        check_matrix_dimensions(&matrix, targets)?;
        check_unitary(&matrix)?;
        Ok(Self {
            matrix,
            targets: SmallVec::from_slice(targets),
        })
    }

    /// The gate's unitary matrix
    #[inline]
    pub fn matrix(&self) -> &SquareMatrix {
        &self.matrix
    }
}

impl Operation for GateOperation {
    fn targets(&self) -> &[QubitId] {
        &self.targets
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// A quantum channel given by an ordered set of Kraus operators
#[derive(Clone, Debug)]
pub struct KrausOperation {
    matrices: Vec<SquareMatrix>,
    targets: SmallVec<[QubitId; 2]>,
}

impl KrausOperation {
    /// Create a Kraus channel, validating the operator set
    ///
    /// Every matrix must have side length 2^(number of targets) and the set
    /// must jointly satisfy the completeness relation Σ K†K = I.
    ///
    /// # Errors
    /// Returns [`OperationError::DimensionMismatch`] or
    /// [`OperationError::NotCPTP`] when validation fails; an empty set is
    /// rejected as not CPTP.
    pub fn new(matrices: Vec<SquareMatrix>, targets: &[QubitId]) -> Result<Self> {
        for matrix in &matrices {
            check_matrix_dimensions(matrix, targets)?;
        }
        check_cptp(&matrices)?;
        Ok(Self {
            matrices,
            targets: SmallVec::from_slice(targets),
        })
    }

    /// The ordered Kraus operators
    #[inline]
    pub fn matrices(&self) -> &[SquareMatrix] {
        &self.matrices
    }
}

impl Operation for KrausOperation {
    fn targets(&self) -> &[QubitId] {
        &self.targets
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// A measurable quantity, represented by the unitary that diagonalizes it
///
/// The eigenvalue spectrum in the diagonal basis can be attached with
/// [`Observable::with_eigenvalues`]; Pauli-product observables take it from
/// [`crate::PauliEigenvalueCache`].
#[derive(Clone, Debug)]
pub struct Observable {
    diagonalizing: SquareMatrix,
    eigenvalues: Option<Arc<[f64]>>,
    targets: SmallVec<[QubitId; 2]>,
}

impl Observable {
    /// Create an observable from its diagonalizing unitary
    ///
    /// # Errors
    /// Returns [`OperationError::DimensionMismatch`] if the matrix side
    /// length is not 2^(number of targets), [`OperationError::NotUnitary`]
    /// if the diagonalizing matrix is not unitary.
    pub fn new(diagonalizing: SquareMatrix, targets: &[QubitId]) -> Result<Self> {
        check_matrix_dimensions(&diagonalizing, targets)?;
        check_unitary(&diagonalizing)?;
        Ok(Self {
            diagonalizing,
            eigenvalues: None,
            targets: SmallVec::from_slice(targets),
        })
    }

    /// Attach the eigenvalue spectrum in the diagonal basis
    pub fn with_eigenvalues(mut self, eigenvalues: Arc<[f64]>) -> Self {
        self.eigenvalues = Some(eigenvalues);
        self
    }

    /// The unitary that diagonalizes this observable
    #[inline]
    pub fn diagonalizing_matrix(&self) -> &SquareMatrix {
        &self.diagonalizing
    }

    /// The eigenvalue spectrum, if one was attached
    #[inline]
    pub fn eigenvalues(&self) -> Option<&[f64]> {
        self.eigenvalues.as_deref()
    }
}

impl Operation for Observable {
    fn targets(&self) -> &[QubitId] {
        &self.targets
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Get the matrices that define an operation
///
/// The return shape is uniform across variants: a non-empty ordered slice.
/// A gate yields its unitary as a singleton, a Kraus channel its ordered
/// operator set, an observable its diagonalizing matrix as a singleton.
///
/// # Errors
/// Returns [`OperationError::UnrecognizedOperation`] for any [`Operation`]
/// implementation outside the closed gate/Kraus/observable set.
///
/// # Example
/// ```
/// use qop_core::{get_matrix, GateOperation, Operation, QubitId, SquareMatrix};
///
/// let gate = GateOperation::new(SquareMatrix::identity(2), &[QubitId::new(0)]).unwrap();
/// let matrices = get_matrix(&gate).unwrap();
/// assert_eq!(matrices.len(), 1);
/// ```
pub fn get_matrix(operation: &dyn Operation) -> Result<&[SquareMatrix]> {
    let any = operation.as_any();
    if let Some(gate) = any.downcast_ref::<GateOperation>() {
        Ok(std::slice::from_ref(gate.matrix()))
    } else if let Some(kraus) = any.downcast_ref::<KrausOperation>() {
        Ok(kraus.matrices())
    } else if let Some(observable) = any.downcast_ref::<Observable>() {
        Ok(std::slice::from_ref(observable.diagonalizing_matrix()))
    } else {
        Err(OperationError::UnrecognizedOperation(format!(
            "{:?}",
            operation
        )))
    }
}
