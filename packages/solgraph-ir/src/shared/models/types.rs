//! Minimal type model for IR operands
//!
//! Only what operations need: elementary contract types plus a tuple type
//! for multi-value temporaries. Full type resolution lives upstream.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Elementary contract-level type
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementaryType {
    Address,
    Bool,
    /// Unsigned integer with bit width (e.g. 256 for uint256)
    Uint(u16),
    /// Signed integer with bit width
    Int(u16),
    /// Fixed-size byte array (bytes1..bytes32)
    FixedBytes(u8),
    /// Dynamic byte array
    Bytes,
    String,
}

impl fmt::Display for ElementaryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementaryType::Address => write!(f, "address"),
            ElementaryType::Bool => write!(f, "bool"),
            ElementaryType::Uint(bits) => write!(f, "uint{}", bits),
            ElementaryType::Int(bits) => write!(f, "int{}", bits),
            ElementaryType::FixedBytes(n) => write!(f, "bytes{}", n),
            ElementaryType::Bytes => write!(f, "bytes"),
            ElementaryType::String => write!(f, "string"),
        }
    }
}

/// Operand type
///
/// Tuple types back multi-value temporaries (e.g. the `(bool, bytes)`
/// result of a raw external call).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Type {
    Elementary(ElementaryType),
    Tuple(Vec<Type>),
}

impl Type {
    pub fn uint256() -> Self {
        Type::Elementary(ElementaryType::Uint(256))
    }

    pub fn address() -> Self {
        Type::Elementary(ElementaryType::Address)
    }

    pub fn bool() -> Self {
        Type::Elementary(ElementaryType::Bool)
    }

    pub fn is_tuple(&self) -> bool {
        matches!(self, Type::Tuple(_))
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Elementary(ty) => ty.fmt(f),
            // Tuple-typed results render as a comma-joined component list
            Type::Tuple(parts) => {
                let joined = parts
                    .iter()
                    .map(|t| t.to_string())
                    .collect::<Vec<_>>()
                    .join(",");
                write!(f, "{}", joined)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elementary_display() {
        assert_eq!(Type::uint256().to_string(), "uint256");
        assert_eq!(Type::address().to_string(), "address");
        assert_eq!(
            Type::Elementary(ElementaryType::FixedBytes(32)).to_string(),
            "bytes32"
        );
    }

    #[test]
    fn test_tuple_display_comma_joined() {
        let ty = Type::Tuple(vec![Type::bool(), Type::Elementary(ElementaryType::Bytes)]);
        assert_eq!(ty.to_string(), "bool,bytes");
    }
}
