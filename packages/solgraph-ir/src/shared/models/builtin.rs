//! Builtin pseudo-variables
//!
//! Environment-provided values (caller identity, current contract, block
//! context). They behave as read-only operands but belong to no symbol
//! table; the set is closed and referenced by name.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use super::types::{ElementaryType, Type};

/// The closed set of environment pseudo-variables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BuiltinVariable {
    MsgSender,
    MsgValue,
    MsgData,
    /// Reference to the current contract
    This,
    TxOrigin,
    TxGasPrice,
    BlockTimestamp,
    BlockNumber,
    BlockCoinbase,
    Gasleft,
}

impl BuiltinVariable {
    pub const ALL: [BuiltinVariable; 10] = [
        BuiltinVariable::MsgSender,
        BuiltinVariable::MsgValue,
        BuiltinVariable::MsgData,
        BuiltinVariable::This,
        BuiltinVariable::TxOrigin,
        BuiltinVariable::TxGasPrice,
        BuiltinVariable::BlockTimestamp,
        BuiltinVariable::BlockNumber,
        BuiltinVariable::BlockCoinbase,
        BuiltinVariable::Gasleft,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            BuiltinVariable::MsgSender => "msg.sender",
            BuiltinVariable::MsgValue => "msg.value",
            BuiltinVariable::MsgData => "msg.data",
            BuiltinVariable::This => "this",
            BuiltinVariable::TxOrigin => "tx.origin",
            BuiltinVariable::TxGasPrice => "tx.gasprice",
            BuiltinVariable::BlockTimestamp => "block.timestamp",
            BuiltinVariable::BlockNumber => "block.number",
            BuiltinVariable::BlockCoinbase => "block.coinbase",
            BuiltinVariable::Gasleft => "gasleft()",
        }
    }

    /// Lookup by source-level name
    pub fn from_name(name: &str) -> Option<BuiltinVariable> {
        BUILTIN_BY_NAME.get(name).copied()
    }

    /// Environment-level type of the pseudo-variable
    pub fn ty(&self) -> Type {
        match self {
            BuiltinVariable::MsgSender
            | BuiltinVariable::This
            | BuiltinVariable::TxOrigin
            | BuiltinVariable::BlockCoinbase => Type::address(),
            BuiltinVariable::MsgValue
            | BuiltinVariable::TxGasPrice
            | BuiltinVariable::BlockTimestamp
            | BuiltinVariable::BlockNumber
            | BuiltinVariable::Gasleft => Type::uint256(),
            BuiltinVariable::MsgData => Type::Elementary(ElementaryType::Bytes),
        }
    }
}

static BUILTIN_BY_NAME: Lazy<HashMap<&'static str, BuiltinVariable>> = Lazy::new(|| {
    BuiltinVariable::ALL.iter().map(|b| (b.name(), *b)).collect()
});

impl fmt::Display for BuiltinVariable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_roundtrip_for_closed_set() {
        for b in BuiltinVariable::ALL {
            assert_eq!(BuiltinVariable::from_name(b.name()), Some(b));
        }
    }

    #[test]
    fn test_unknown_name() {
        assert_eq!(BuiltinVariable::from_name("msg.gas"), None);
    }

    #[test]
    fn test_builtin_types() {
        assert_eq!(BuiltinVariable::MsgSender.ty(), Type::address());
        assert_eq!(BuiltinVariable::This.ty(), Type::address());
        assert_eq!(BuiltinVariable::MsgValue.ty(), Type::uint256());
        assert_eq!(
            BuiltinVariable::MsgData.ty(),
            Type::Elementary(ElementaryType::Bytes)
        );
    }
}
