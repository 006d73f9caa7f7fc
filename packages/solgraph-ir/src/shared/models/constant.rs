//! Constant operands
//!
//! Immutable literals carrying their own type. Besides ordinary literal
//! operands, constants carry call signatures/selectors as fixed strings
//! known at IR-construction time.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::types::Type;

/// Constant ID (arena index into `FunctionSymbols`)
pub type ConstantId = usize;

/// Literal payload of a constant
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConstantValue {
    /// String literal, including function signatures like
    /// `transfer(address,uint256)`
    Str(String),
    Uint(u128),
    Int(i128),
    Bool(bool),
    /// 20-byte address literal, hex-encoded
    Address(String),
}

impl fmt::Display for ConstantValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstantValue::Str(s) => write!(f, "{}", s),
            ConstantValue::Uint(v) => write!(f, "{}", v),
            ConstantValue::Int(v) => write!(f, "{}", v),
            ConstantValue::Bool(v) => write!(f, "{}", v),
            ConstantValue::Address(hex) => write!(f, "{}", hex),
        }
    }
}

/// An immutable literal with its type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Constant {
    pub id: ConstantId,
    pub value: ConstantValue,
    pub ty: Type,
}

impl Constant {
    /// String form of the literal (signature text for call names)
    pub fn as_str(&self) -> String {
        self.value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::models::types::{ElementaryType, Type};

    #[test]
    fn test_signature_constant_displays_as_text() {
        let c = Constant {
            id: 0,
            value: ConstantValue::Str("transfer(address,uint256)".into()),
            ty: Type::Elementary(ElementaryType::String),
        };
        assert_eq!(c.as_str(), "transfer(address,uint256)");
    }
}
