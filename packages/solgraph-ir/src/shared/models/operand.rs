//! Operand references
//!
//! Operations never own their operands; they hold cheap id-based
//! references into the function symbol table (or a builtin tag).
//! Equality is identity-based, which is what def-use keys need.

use serde::{Deserialize, Serialize};

use super::builtin::BuiltinVariable;
use super::constant::ConstantId;
use super::variable::VarId;

/// A value reference usable as an instruction operand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operand {
    Variable(VarId),
    Constant(ConstantId),
    Builtin(BuiltinVariable),
}

impl Operand {
    pub fn is_constant(&self) -> bool {
        matches!(self, Operand::Constant(_))
    }

    pub fn as_variable(&self) -> Option<VarId> {
        match self {
            Operand::Variable(id) => Some(*id),
            _ => None,
        }
    }
}

impl From<BuiltinVariable> for Operand {
    fn from(b: BuiltinVariable) -> Self {
        Operand::Builtin(b)
    }
}
