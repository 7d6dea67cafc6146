//! Open registry mapping instruction kinds to operation constructors
//!
//! New instruction kinds register a constructor without touching the
//! dispatch logic. The registry is built once at startup and then shared
//! immutably (e.g. behind an `Arc`) for concurrent dispatch.

use crate::instruction::{decode_ir_matrix, Instruction};
use crate::operation::{GateOperation, KrausOperation, Operation};
use crate::{OperationError, Result};
use std::collections::HashMap;
use std::sync::Arc;

/// Constructor invoked with the instruction's parameters
pub type OperationConstructor =
    Box<dyn Fn(&Instruction) -> Result<Arc<dyn Operation>> + Send + Sync>;

/// Registry of instruction constructors, keyed by kind discriminant
///
/// Constructors are expected to route their matrices through the
/// validators (the [`GateOperation`]/[`KrausOperation`]/
/// [`crate::Observable`] constructors do this), so dispatch rejects
/// malformed circuits before they reach the evolution engine.
///
/// # Example
/// ```
/// use qop_core::{GateOperation, Instruction, InstructionRegistry, Operation, SquareMatrix};
/// use std::sync::Arc;
///
/// let mut registry = InstructionRegistry::with_standard_kinds();
/// registry.register("i", |instruction| {
///     let gate = GateOperation::new(SquareMatrix::identity(2), &instruction.target_ids())?;
///     let operation: Arc<dyn Operation> = Arc::new(gate);
///     Ok(operation)
/// });
///
/// let operation = registry.from_instruction(&Instruction::new("i", &[0])).unwrap();
/// assert_eq!(operation.targets().len(), 1);
/// ```
#[derive(Default)]
pub struct InstructionRegistry {
    constructors: HashMap<String, OperationConstructor>,
}

impl InstructionRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with the generic matrix-backed kinds registered
    ///
    /// Registers `"unitary"` (gate defined by a raw matrix) and `"kraus"`
    /// (channel defined by a raw matrix list). Named gate and observable
    /// kinds are a catalogue concern and register themselves.
    pub fn with_standard_kinds() -> Self {
        let mut registry = Self::new();
        registry.register("unitary", unitary_from_instruction);
        registry.register("kraus", kraus_from_instruction);
        registry
    }

    /// Register a constructor for an instruction kind
    ///
    /// A later registration for the same kind replaces the earlier one.
    pub fn register<F>(&mut self, kind: impl Into<String>, constructor: F)
    where
        F: Fn(&Instruction) -> Result<Arc<dyn Operation>> + Send + Sync + 'static,
    {
        self.constructors.insert(kind.into(), Box::new(constructor));
    }

    /// Whether a constructor is registered for the kind
    pub fn contains(&self, kind: &str) -> bool {
        self.constructors.contains_key(kind)
    }

    /// All registered kind discriminants
    pub fn kinds(&self) -> Vec<&str> {
        self.constructors.keys().map(|s| s.as_str()).collect()
    }

    /// Instantiate the concrete operation for an instruction
    ///
    /// # Errors
    /// Returns [`OperationError::UnrecognizedInstruction`] if no constructor
    /// is registered for the instruction's kind; otherwise any validation
    /// error the constructor raises.
    pub fn from_instruction(&self, instruction: &Instruction) -> Result<Arc<dyn Operation>> {
        let constructor = self
            .constructors
            .get(&instruction.kind)
            .ok_or_else(|| OperationError::UnrecognizedInstruction(instruction.kind.clone()))?;
        constructor(instruction)
    }
}

impl std::fmt::Debug for InstructionRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut kinds = self.kinds();
        kinds.sort_unstable();
        f.debug_struct("InstructionRegistry")
            .field("kinds", &kinds)
            .finish()
    }
}

fn unitary_from_instruction(instruction: &Instruction) -> Result<Arc<dyn Operation>> {
    let ir = instruction.matrix.as_ref().ok_or_else(|| {
        OperationError::invalid_argument(format!(
            "'{}' instruction is missing its matrix",
            instruction.kind
        ))
    })?;
    let matrix = decode_ir_matrix(ir)?;
    Ok(Arc::new(GateOperation::new(
        matrix,
        &instruction.target_ids(),
    )?))
}

fn kraus_from_instruction(instruction: &Instruction) -> Result<Arc<dyn Operation>> {
    let ir_matrices = instruction.matrices.as_ref().ok_or_else(|| {
        OperationError::invalid_argument(format!(
            "'{}' instruction is missing its matrices",
            instruction.kind
        ))
    })?;
    let matrices = ir_matrices
        .iter()
        .map(decode_ir_matrix)
        .collect::<Result<Vec<_>>>()?;
    Ok(Arc::new(KrausOperation::new(
        matrices,
        &instruction.target_ids(),
    )?))
}
