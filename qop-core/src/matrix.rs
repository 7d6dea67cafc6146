//! Dense complex square matrices and floating-point tolerance

use crate::{OperationError, Result};
use num_complex::Complex64;
use std::fmt;
use std::ops::AddAssign;

/// Absolute and relative epsilon for approximate matrix comparison
///
/// Two complex values a and b are close when
/// `|a - b| <= absolute + relative * |b|`. Matrix validity is purely
/// numeric, so the tolerance is an explicit constant rather than an
/// implicit library default.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance {
    /// Absolute epsilon
    pub absolute: f64,
    /// Relative epsilon, scaled by the magnitude of the reference value
    pub relative: f64,
}

impl Tolerance {
    /// Default tolerance for double-precision matrix checks
    pub const DEFAULT: Self = Self {
        absolute: 1e-8,
        relative: 1e-5,
    };

    /// Whether two complex values are close under this tolerance
    #[inline]
    pub fn is_close(&self, a: Complex64, b: Complex64) -> bool {
        (a - b).norm() <= self.absolute + self.relative * b.norm()
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// A dense, row-major, complex-valued square matrix
///
/// Carries no identity beyond its values. For an operation on n qubits the
/// expected side length is 2^n, but squareness is the only shape invariant
/// enforced at construction; dimensionality against a target tuple is
/// checked by [`crate::validation::check_matrix_dimensions`].
///
/// # Example
/// ```
/// use qop_core::{Complex64, SquareMatrix};
///
/// let identity = SquareMatrix::identity(2);
/// assert_eq!(identity.dimension(), 2);
/// assert_eq!(identity.get(0, 0), Complex64::new(1.0, 0.0));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SquareMatrix {
    /// Elements in row-major order, length dimension²
    elements: Vec<Complex64>,
    /// Side length
    dimension: usize,
}

impl SquareMatrix {
    /// Create a matrix from row-major elements
    ///
    /// # Errors
    /// Returns [`OperationError::InvalidShape`] if the element count is not
    /// a perfect square of `dimension` or the dimension is zero.
    pub fn new(elements: Vec<Complex64>, dimension: usize) -> Result<Self> {
        if dimension == 0 {
            return Err(OperationError::invalid_shape(
                "matrix dimension must be at least 1",
            ));
        }
        if elements.len() != dimension * dimension {
            return Err(OperationError::invalid_shape(format!(
                "{} elements do not form a {}x{} matrix",
                elements.len(),
                dimension,
                dimension
            )));
        }
        Ok(Self {
            elements,
            dimension,
        })
    }

    /// Create a matrix from nested rows
    ///
    /// # Errors
    /// Returns [`OperationError::InvalidShape`] for ragged input or when the
    /// row count differs from the column count.
    pub fn from_rows(rows: Vec<Vec<Complex64>>) -> Result<Self> {
        let dimension = rows.len();
        if dimension == 0 {
            return Err(OperationError::invalid_shape("matrix has no rows"));
        }
        for (i, row) in rows.iter().enumerate() {
            if row.len() != dimension {
                return Err(OperationError::invalid_shape(format!(
                    "row {} has {} columns, expected {}",
                    i,
                    row.len(),
                    dimension
                )));
            }
        }
        let elements = rows.into_iter().flatten().collect();
        Self::new(elements, dimension)
    }

    /// The identity matrix of the given dimension
    pub fn identity(dimension: usize) -> Self {
        let mut elements = vec![Complex64::new(0.0, 0.0); dimension * dimension];
        for i in 0..dimension {
            elements[i * dimension + i] = Complex64::new(1.0, 0.0);
        }
        Self {
            elements,
            dimension,
        }
    }

    /// Side length of the matrix
    #[inline]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Number of qubits a matrix of this dimension acts on, if the
    /// dimension is a power of two
    #[inline]
    pub fn num_qubits(&self) -> Option<usize> {
        self.dimension
            .is_power_of_two()
            .then(|| self.dimension.trailing_zeros() as usize)
    }

    /// Element at (row, col)
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Complex64 {
        self.elements[row * self.dimension + col]
    }

    /// Row-major elements
    #[inline]
    pub fn elements(&self) -> &[Complex64] {
        &self.elements
    }

    /// The conjugate transpose of this matrix
    pub fn adjoint(&self) -> Self {
        let d = self.dimension;
        let mut elements = vec![Complex64::new(0.0, 0.0); d * d];
        for i in 0..d {
            for j in 0..d {
                elements[j * d + i] = self.elements[i * d + j].conj();
            }
        }
        Self {
            elements,
            dimension: d,
        }
    }

    /// Matrix product `self · other`
    ///
    /// # Panics
    /// Panics if the dimensions differ.
    pub fn multiply(&self, other: &Self) -> Self {
        assert_eq!(
            self.dimension, other.dimension,
            "matrix product requires equal dimensions"
        );
        let d = self.dimension;
        let mut elements = vec![Complex64::new(0.0, 0.0); d * d];
        for i in 0..d {
            for k in 0..d {
                let a_ik = self.elements[i * d + k];
                for j in 0..d {
                    elements[i * d + j] += a_ik * other.elements[k * d + j];
                }
            }
        }
        Self {
            elements,
            dimension: d,
        }
    }

    /// Component-wise closeness to another matrix under the tolerance
    ///
    /// Matrices of different dimensions are never close.
    pub fn approx_eq(&self, other: &Self, tolerance: Tolerance) -> bool {
        self.dimension == other.dimension
            && self
                .elements
                .iter()
                .zip(other.elements.iter())
                .all(|(&a, &b)| tolerance.is_close(a, b))
    }

    /// Whether this matrix is the identity within the tolerance
    pub fn is_identity(&self, tolerance: Tolerance) -> bool {
        let d = self.dimension;
        self.elements.iter().enumerate().all(|(idx, &value)| {
            let expected = if idx / d == idx % d {
                Complex64::new(1.0, 0.0)
            } else {
                Complex64::new(0.0, 0.0)
            };
            tolerance.is_close(value, expected)
        })
    }
}

impl AddAssign<&SquareMatrix> for SquareMatrix {
    /// Element-wise accumulation
    ///
    /// # Panics
    /// Panics if the dimensions differ.
    fn add_assign(&mut self, other: &SquareMatrix) {
        assert_eq!(
            self.dimension, other.dimension,
            "matrix sum requires equal dimensions"
        );
        for (a, b) in self.elements.iter_mut().zip(other.elements.iter()) {
            *a += b;
        }
    }
}

impl fmt::Display for SquareMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for i in 0..self.dimension {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "[")?;
            for j in 0..self.dimension {
                if j > 0 {
                    write!(f, ", ")?;
                }
                let v = self.get(i, j);
                write!(f, "{}{:+}i", v.re, v.im)?;
            }
            write!(f, "]")?;
        }
        write!(f, "]")
    }
}
