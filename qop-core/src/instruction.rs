//! Wire-level instruction descriptors and IR matrix decoding
//!
//! Instructions arrive from an upstream IR parser as a kind discriminant
//! plus kind-specific parameters. Raw matrix data is encoded as rows of
//! `[real, imaginary]` pairs; decoding preserves row/column ordering with
//! no transposition.

use crate::matrix::SquareMatrix;
use crate::{Complex64, QubitId, Result};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// IR encoding of a complex matrix: rows of `[real, imaginary]` pairs
pub type IrMatrix = Vec<Vec<[f64; 2]>>;

/// A format-agnostic instruction descriptor
///
/// Consumed once by [`crate::InstructionRegistry::from_instruction`]. Only
/// `kind` and `targets` are always present; the remaining fields are
/// kind-specific parameters and stay `None` when a kind does not use them.
///
/// # Example
/// ```
/// use qop_core::Instruction;
///
/// let instruction = Instruction::new("unitary", &[0]).with_matrix(vec![
///     vec![[0.0, 0.0], [1.0, 0.0]],
///     vec![[1.0, 0.0], [0.0, 0.0]],
/// ]);
/// assert_eq!(instruction.kind, "unitary");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Instruction {
    /// Discriminant selecting the registered constructor
    #[serde(rename = "type")]
    pub kind: String,

    /// Ordered target qubit indices
    #[serde(default)]
    pub targets: Vec<usize>,

    /// Rotation angle, for parameterized gate kinds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub angle: Option<f64>,

    /// Error probability, for parameterized noise kinds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub probability: Option<f64>,

    /// Raw matrix, for kinds defined by a single matrix
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matrix: Option<IrMatrix>,

    /// Raw matrix list, for Kraus channel kinds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matrices: Option<Vec<IrMatrix>>,
}

impl Instruction {
    /// Create an instruction with a kind and target qubits
    pub fn new(kind: impl Into<String>, targets: &[usize]) -> Self {
        Self {
            kind: kind.into(),
            targets: targets.to_vec(),
            angle: None,
            probability: None,
            matrix: None,
            matrices: None,
        }
    }

    /// Attach a raw matrix parameter
    pub fn with_matrix(mut self, matrix: IrMatrix) -> Self {
        self.matrix = Some(matrix);
        self
    }

    /// Attach a raw matrix list parameter
    pub fn with_matrices(mut self, matrices: Vec<IrMatrix>) -> Self {
        self.matrices = Some(matrices);
        self
    }

    /// Attach an angle parameter
    pub fn with_angle(mut self, angle: f64) -> Self {
        self.angle = Some(angle);
        self
    }

    /// Attach a probability parameter
    pub fn with_probability(mut self, probability: f64) -> Self {
        self.probability = Some(probability);
        self
    }

    /// The targets as typed qubit identifiers
    pub fn target_ids(&self) -> SmallVec<[QubitId; 2]> {
        self.targets.iter().map(|&i| QubitId::new(i)).collect()
    }
}

/// Decode an IR matrix into a [`SquareMatrix`]
///
/// Each `[re, im]` cell becomes one complex element; row and column order
/// are preserved exactly.
///
/// # Errors
/// Returns [`crate::OperationError::InvalidShape`] for ragged or non-square
/// input.
pub fn decode_ir_matrix(ir: &IrMatrix) -> Result<SquareMatrix> {
    let rows = ir
        .iter()
        .map(|row| {
            row.iter()
                .map(|&[re, im]| Complex64::new(re, im))
                .collect()
        })
        .collect();
    SquareMatrix::from_rows(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::OperationError;

    #[test]
    fn test_decode_preserves_ordering() {
        let ir = vec![
            vec![[1.0, 2.0], [3.0, 4.0]],
            vec![[5.0, 6.0], [7.0, 8.0]],
        ];
        let matrix = decode_ir_matrix(&ir).unwrap();
        assert_eq!(matrix.dimension(), 2);
        assert_eq!(matrix.get(0, 1), Complex64::new(3.0, 4.0));
        assert_eq!(matrix.get(1, 0), Complex64::new(5.0, 6.0));
    }

    #[test]
    fn test_decode_rejects_non_square() {
        let ir = vec![vec![[1.0, 0.0], [0.0, 0.0], [0.0, 0.0]]; 2];
        assert!(matches!(
            decode_ir_matrix(&ir),
            Err(OperationError::InvalidShape(_))
        ));
    }

    #[test]
    fn test_decode_rejects_empty() {
        assert!(matches!(
            decode_ir_matrix(&vec![]),
            Err(OperationError::InvalidShape(_))
        ));
    }

    #[test]
    fn test_target_ids() {
        let instruction = Instruction::new("cnot", &[1, 0]);
        let ids = instruction.target_ids();
        assert_eq!(&ids[..], &[QubitId::new(1), QubitId::new(0)]);
    }

    #[test]
    fn test_json_round_trip() {
        let instruction = Instruction::new("unitary", &[0])
            .with_matrix(vec![
                vec![[1.0, 0.0], [0.0, 0.0]],
                vec![[0.0, 0.0], [1.0, 0.0]],
            ]);
        let json = serde_json::to_string(&instruction).unwrap();
        let parsed: Instruction = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, instruction);
    }

    #[test]
    fn test_json_kind_field_is_type() {
        let parsed: Instruction =
            serde_json::from_str(r#"{"type": "rz", "targets": [2], "angle": 1.5}"#).unwrap();
        assert_eq!(parsed.kind, "rz");
        assert_eq!(parsed.targets, vec![2]);
        assert_eq!(parsed.angle, Some(1.5));
        assert_eq!(parsed.matrix, None);
    }
}
