//! Variable operands
//!
//! A variable is a named, typed storage location owned by the enclosing
//! function's symbol table. Operations reference variables by `VarId`,
//! never by ownership, so identity is stable for def-use keys.

use serde::{Deserialize, Serialize};

use super::types::Type;

/// Variable ID (arena index into `FunctionSymbols`)
pub type VarId = usize;

/// Where a variable lives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StorageLocation {
    /// Contract storage, persists across calls
    State,
    /// Function-local
    Local,
    /// Compiler-introduced temporary
    Temporary,
}

/// Scalar vs multi-value shape
///
/// Tuple temporaries carry their component variables; `read()` unrolls
/// them one level into those components.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum VariableKind {
    Scalar,
    Tuple(Vec<VarId>),
}

/// A named storage location (state, local, or temporary)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variable {
    pub id: VarId,
    pub name: String,
    pub ty: Type,
    pub location: StorageLocation,
    pub kind: VariableKind,
}

impl Variable {
    pub fn is_state(&self) -> bool {
        self.location == StorageLocation::State
    }

    pub fn is_tuple(&self) -> bool {
        matches!(self.kind, VariableKind::Tuple(_))
    }

    /// Component ids of a tuple temporary, empty for scalars
    pub fn components(&self) -> &[VarId] {
        match &self.kind {
            VariableKind::Scalar => &[],
            VariableKind::Tuple(parts) => parts,
        }
    }
}
