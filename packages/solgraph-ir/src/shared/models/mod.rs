//! Shared models

pub mod builtin;
pub mod constant;
pub mod operand;
pub mod symbols;
pub mod types;
pub mod variable;

pub use builtin::BuiltinVariable;
pub use constant::{Constant, ConstantId, ConstantValue};
pub use operand::Operand;
pub use symbols::FunctionSymbols;
pub use types::{ElementaryType, Type};
pub use variable::{StorageLocation, VarId, Variable, VariableKind};

/// Function identifier (canonical name, stable per analysis run)
pub type FunctionId = String;
