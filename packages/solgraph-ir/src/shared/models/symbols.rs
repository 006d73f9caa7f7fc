//! Function symbol table
//!
//! Owns the variables and interned constants a function body references.
//! Operations store `VarId`/`ConstantId` indices into these arenas, so
//! the table is the single owner and identities stay stable.

use serde::{Deserialize, Serialize};

use super::constant::{Constant, ConstantId, ConstantValue};
use super::operand::Operand;
use super::types::Type;
use super::variable::{StorageLocation, VarId, Variable, VariableKind};

/// Per-function arena of variables and constants
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FunctionSymbols {
    variables: Vec<Variable>,
    constants: Vec<Constant>,
}

impl FunctionSymbols {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a scalar variable, returning its id
    pub fn add_variable(
        &mut self,
        name: impl Into<String>,
        ty: Type,
        location: StorageLocation,
    ) -> VarId {
        let id = self.variables.len();
        self.variables.push(Variable {
            id,
            name: name.into(),
            ty,
            location,
            kind: VariableKind::Scalar,
        });
        id
    }

    /// Add a tuple temporary whose components are already registered
    pub fn add_tuple_temporary(&mut self, name: impl Into<String>, components: Vec<VarId>) -> VarId {
        let ty = Type::Tuple(
            components
                .iter()
                .map(|c| self.variables[*c].ty.clone())
                .collect(),
        );
        let id = self.variables.len();
        self.variables.push(Variable {
            id,
            name: name.into(),
            ty,
            location: StorageLocation::Temporary,
            kind: VariableKind::Tuple(components),
        });
        id
    }

    /// Intern a constant, returning its id
    pub fn add_constant(&mut self, value: ConstantValue, ty: Type) -> ConstantId {
        if let Some(existing) = self
            .constants
            .iter()
            .find(|c| c.value == value && c.ty == ty)
        {
            return existing.id;
        }
        let id = self.constants.len();
        self.constants.push(Constant { id, value, ty });
        id
    }

    pub fn variable(&self, id: VarId) -> &Variable {
        &self.variables[id]
    }

    pub fn constant(&self, id: ConstantId) -> &Constant {
        &self.constants[id]
    }

    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    /// Type of an operand
    pub fn operand_type(&self, op: Operand) -> Type {
        match op {
            Operand::Variable(id) => self.variable(id).ty.clone(),
            Operand::Constant(id) => self.constant(id).ty.clone(),
            Operand::Builtin(b) => b.ty(),
        }
    }

    /// Display form of an operand
    pub fn operand_name(&self, op: Operand) -> String {
        match op {
            Operand::Variable(id) => self.variable(id).name.clone(),
            Operand::Constant(id) => self.constant(id).as_str(),
            Operand::Builtin(b) => b.to_string(),
        }
    }

    /// Flatten a read list one level: drop nothing (callers already removed
    /// absent entries), expand tuple temporaries into their components.
    pub fn unroll(&self, operands: impl IntoIterator<Item = Operand>) -> Vec<Operand> {
        let mut flat = Vec::new();
        for op in operands {
            match op {
                Operand::Variable(id) if self.variable(id).is_tuple() => {
                    flat.extend(self.variable(id).components().iter().map(|c| Operand::Variable(*c)));
                }
                other => flat.push(other),
            }
        }
        flat
    }
}
