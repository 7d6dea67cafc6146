//! Operation validation and dispatch core for a quantum-circuit simulator
//!
//! This crate turns format-agnostic instruction descriptors into
//! strongly-typed operations and enforces the linear-algebra invariants the
//! evolution engine depends on:
//! - [`Instruction`]: wire-level descriptor with a kind discriminant
//! - [`InstructionRegistry`]: open constructor registry for dispatch
//! - [`GateOperation`], [`KrausOperation`], [`Observable`]: validated operations
//! - [`validation`]: unitarity, Hermiticity, CPTP and dimension checks
//! - [`PauliEigenvalueCache`]: memoized ±1 spectra for measurement paths
//!
//! # Example
//! ```
//! use qop_core::{Instruction, InstructionRegistry, get_matrix};
//!
//! let registry = InstructionRegistry::with_standard_kinds();
//! let instruction = Instruction::new("unitary", &[0]).with_matrix(vec![
//!     vec![[0.0, 0.0], [1.0, 0.0]],
//!     vec![[1.0, 0.0], [0.0, 0.0]],
//! ]);
//!
//! let operation = registry.from_instruction(&instruction).unwrap();
//! let matrices = get_matrix(operation.as_ref()).unwrap();
//! assert_eq!(matrices.len(), 1);
//! ```

pub mod dispatch;
pub mod eigenvalues;
pub mod error;
pub mod instruction;
pub mod matrix;
pub mod operation;
pub mod qubit;
pub mod validation;

// Re-exports for convenience
pub use dispatch::{InstructionRegistry, OperationConstructor};
pub use eigenvalues::PauliEigenvalueCache;
pub use error::OperationError;
pub use instruction::{decode_ir_matrix, Instruction, IrMatrix};
pub use matrix::{SquareMatrix, Tolerance};
pub use num_complex::Complex64;
pub use operation::{get_matrix, GateOperation, KrausOperation, Observable, Operation};
pub use qubit::QubitId;
pub use validation::{check_cptp, check_hermitian, check_matrix_dimensions, check_unitary};

/// Type alias for results in this crate
pub type Result<T> = std::result::Result<T, OperationError>;
