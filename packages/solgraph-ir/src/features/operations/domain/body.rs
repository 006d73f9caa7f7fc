//! Function bodies
//!
//! `DraftBody` is what the IR builder emits: ready operations plus staged
//! low-level calls awaiting rider enrichment. `FunctionBody` is the
//! frozen form consumed by analyses; instruction order is program order
//! and is never reordered.

use serde::{Deserialize, Serialize};

use crate::shared::models::{FunctionId, FunctionSymbols};

use super::low_level_call::LowLevelCallBuilder;
use super::operation::Operation;

/// An instruction that may still be awaiting enrichment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DraftOp {
    Ready(Operation),
    PendingLowLevelCall(LowLevelCallBuilder),
}

/// Builder-side function body, pre-enrichment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DraftBody {
    pub function_id: FunctionId,
    pub symbols: FunctionSymbols,
    pub ops: Vec<DraftOp>,
}

impl DraftBody {
    pub fn new(function_id: impl Into<FunctionId>, symbols: FunctionSymbols) -> Self {
        Self {
            function_id: function_id.into(),
            symbols,
            ops: Vec::new(),
        }
    }

    pub fn push(&mut self, op: Operation) {
        self.ops.push(DraftOp::Ready(op));
    }

    pub fn push_low_level_call(&mut self, call: LowLevelCallBuilder) {
        self.ops.push(DraftOp::PendingLowLevelCall(call));
    }
}

/// Frozen function body: symbols plus instructions in program order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionBody {
    pub function_id: FunctionId,
    pub symbols: FunctionSymbols,
    pub instructions: Vec<Operation>,
}

impl FunctionBody {
    /// Instructions in program order (= evaluation order)
    pub fn instructions(&self) -> impl Iterator<Item = (usize, &Operation)> {
        self.instructions.iter().enumerate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::operations::domain::{Assignment, Operation};
    use crate::shared::models::{ConstantValue, Operand, StorageLocation, Type};

    #[test]
    fn test_function_body_json_roundtrip() {
        let mut symbols = FunctionSymbols::new();
        let x = symbols.add_variable("x", Type::uint256(), StorageLocation::State);
        let one = symbols.add_constant(ConstantValue::Uint(1), Type::uint256());
        let body = FunctionBody {
            function_id: "C.f()".into(),
            symbols,
            instructions: vec![Operation::Assignment(Assignment {
                lvalue: x,
                rvalue: Operand::Constant(one),
            })],
        };

        let json = serde_json::to_string(&body).unwrap();
        let back: FunctionBody = serde_json::from_str(&json).unwrap();
        assert_eq!(back.function_id, body.function_id);
        assert_eq!(back.instructions, body.instructions);
    }
}
