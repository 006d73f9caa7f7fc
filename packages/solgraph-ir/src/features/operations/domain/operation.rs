//! Operation sum type
//!
//! One instruction in a straight-line sequence. The variant set is closed
//! and every consumer matches it exhaustively, so adding an instruction
//! kind forces every analysis to be updated at compile time. Operations
//! are data: "execution" is interpretation by external analyses.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::shared::models::{
    ConstantId, FunctionId, FunctionSymbols, Operand, Type, VarId,
};

use super::call::{EventCall, HighLevelCall, InternalCall, LibraryCall, Send, Transfer};
use super::low_level_call::LowLevelCall;
use super::lvalue::OperationWithLValue;

/// Binary operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BinaryType {
    Addition,
    Subtraction,
    Multiplication,
    Division,
    Modulo,
    Power,
    Less,
    Greater,
    LessEqual,
    GreaterEqual,
    Equal,
    NotEqual,
    AndAnd,
    OrOr,
}

impl BinaryType {
    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryType::Addition => "+",
            BinaryType::Subtraction => "-",
            BinaryType::Multiplication => "*",
            BinaryType::Division => "/",
            BinaryType::Modulo => "%",
            BinaryType::Power => "**",
            BinaryType::Less => "<",
            BinaryType::Greater => ">",
            BinaryType::LessEqual => "<=",
            BinaryType::GreaterEqual => ">=",
            BinaryType::Equal => "==",
            BinaryType::NotEqual => "!=",
            BinaryType::AndAnd => "&&",
            BinaryType::OrOr => "||",
        }
    }
}

impl fmt::Display for BinaryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Unary operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnaryType {
    Bang,
    Tilde,
}

impl UnaryType {
    pub fn symbol(&self) -> &'static str {
        match self {
            UnaryType::Bang => "!",
            UnaryType::Tilde => "~",
        }
    }
}

/// `lvalue := rvalue`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    pub lvalue: VarId,
    pub rvalue: Operand,
}

impl OperationWithLValue for Assignment {
    fn result(&self) -> Option<VarId> {
        Some(self.lvalue)
    }
}

/// `lvalue = left <op> right`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Binary {
    pub lvalue: VarId,
    pub operation: BinaryType,
    pub left: Operand,
    pub right: Operand,
}

impl OperationWithLValue for Binary {
    fn result(&self) -> Option<VarId> {
        Some(self.lvalue)
    }
}

/// `lvalue = <op> operand`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unary {
    pub lvalue: VarId,
    pub operation: UnaryType,
    pub operand: Operand,
}

impl OperationWithLValue for Unary {
    fn result(&self) -> Option<VarId> {
        Some(self.lvalue)
    }
}

/// `lvalue = base[index]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Index {
    pub lvalue: VarId,
    pub base: Operand,
    pub index: Operand,
}

impl OperationWithLValue for Index {
    fn result(&self) -> Option<VarId> {
        Some(self.lvalue)
    }
}

/// `lvalue = base.member`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub lvalue: VarId,
    pub base: Operand,
    /// Member name, fixed at construction
    pub member: ConstantId,
}

impl OperationWithLValue for Member {
    fn result(&self) -> Option<VarId> {
        Some(self.lvalue)
    }
}

/// `lvalue = to(operand)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeConversion {
    pub lvalue: VarId,
    pub operand: Operand,
    pub to: Type,
}

impl OperationWithLValue for TypeConversion {
    fn result(&self) -> Option<VarId> {
        Some(self.lvalue)
    }
}

/// Branch condition; reads its value, writes nothing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Condition {
    pub value: Operand,
}

/// Function return; reads the returned values
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Return {
    pub values: Vec<Operand>,
}

/// One instruction in the analysis IR
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operation {
    Assignment(Assignment),
    Binary(Binary),
    Unary(Unary),
    Index(Index),
    Member(Member),
    TypeConversion(TypeConversion),
    Condition(Condition),
    Return(Return),
    InternalCall(InternalCall),
    HighLevelCall(HighLevelCall),
    LowLevelCall(LowLevelCall),
    LibraryCall(LibraryCall),
    EventCall(EventCall),
    Send(Send),
    Transfer(Transfer),
}

impl Operation {
    /// Ordered read set: absent optionals removed, tuple temporaries
    /// flattened one level into their components
    pub fn read(&self, symbols: &FunctionSymbols) -> Vec<Operand> {
        match self {
            Operation::Assignment(op) => symbols.unroll([op.rvalue]),
            Operation::Binary(op) => symbols.unroll([op.left, op.right]),
            Operation::Unary(op) => symbols.unroll([op.operand]),
            Operation::Index(op) => symbols.unroll([op.base, op.index]),
            Operation::Member(op) => symbols.unroll([op.base]),
            Operation::TypeConversion(op) => symbols.unroll([op.operand]),
            Operation::Condition(op) => symbols.unroll([op.value]),
            Operation::Return(op) => symbols.unroll(op.values.iter().copied()),
            Operation::InternalCall(op) => op.read(symbols),
            Operation::HighLevelCall(op) => op.read(symbols),
            Operation::LowLevelCall(op) => op.read(symbols),
            Operation::LibraryCall(op) => op.read(symbols),
            Operation::EventCall(op) => op.read(symbols),
            Operation::Send(op) => op.read(symbols),
            Operation::Transfer(op) => op.read(symbols),
        }
    }

    /// The variable written by this instruction, if it produces one
    pub fn result(&self) -> Option<VarId> {
        match self {
            Operation::Assignment(op) => op.result(),
            Operation::Binary(op) => op.result(),
            Operation::Unary(op) => op.result(),
            Operation::Index(op) => op.result(),
            Operation::Member(op) => op.result(),
            Operation::TypeConversion(op) => op.result(),
            Operation::Condition(_) => None,
            Operation::Return(_) => None,
            Operation::InternalCall(op) => op.result(),
            Operation::HighLevelCall(op) => op.result(),
            Operation::LowLevelCall(op) => op.result(),
            Operation::LibraryCall(op) => op.result(),
            Operation::EventCall(_) => None,
            Operation::Send(op) => op.result(),
            Operation::Transfer(_) => None,
        }
    }

    pub fn is_call(&self) -> bool {
        matches!(
            self,
            Operation::InternalCall(_)
                | Operation::HighLevelCall(_)
                | Operation::LowLevelCall(_)
                | Operation::LibraryCall(_)
                | Operation::EventCall(_)
                | Operation::Send(_)
                | Operation::Transfer(_)
        )
    }

    /// Whether this instruction opens a reentrancy surface
    pub fn can_reenter(&self, call_stack: Option<&[FunctionId]>) -> bool {
        match self {
            Operation::HighLevelCall(op) => op.can_reenter(call_stack),
            Operation::LowLevelCall(op) => op.can_reenter(call_stack),
            Operation::Send(op) => op.can_reenter(call_stack),
            Operation::Transfer(op) => op.can_reenter(call_stack),
            _ => false,
        }
    }

    /// Whether this instruction can move ether
    pub fn can_send_eth(&self) -> bool {
        match self {
            Operation::HighLevelCall(op) => op.can_send_eth(),
            Operation::LowLevelCall(op) => op.can_send_eth(),
            Operation::Send(op) => op.can_send_eth(),
            Operation::Transfer(op) => op.can_send_eth(),
            _ => false,
        }
    }

    /// Diagnostic rendering; not a stable format
    pub fn display(&self, symbols: &FunctionSymbols) -> String {
        let name = |op: &Operand| symbols.operand_name(*op);
        let lhs = |id: &VarId| symbols.variable(*id).name.clone();
        match self {
            Operation::Assignment(op) => {
                format!("{} := {}", lhs(&op.lvalue), name(&op.rvalue))
            }
            Operation::Binary(op) => format!(
                "{} = {} {} {}",
                lhs(&op.lvalue),
                name(&op.left),
                op.operation,
                name(&op.right)
            ),
            Operation::Unary(op) => format!(
                "{} = {}{}",
                lhs(&op.lvalue),
                op.operation.symbol(),
                name(&op.operand)
            ),
            Operation::Index(op) => format!(
                "{} = {}[{}]",
                lhs(&op.lvalue),
                name(&op.base),
                name(&op.index)
            ),
            Operation::Member(op) => format!(
                "{} = {}.{}",
                lhs(&op.lvalue),
                name(&op.base),
                symbols.constant(op.member).as_str()
            ),
            Operation::TypeConversion(op) => format!(
                "{} = CONVERT {} to {}",
                lhs(&op.lvalue),
                name(&op.operand),
                op.to
            ),
            Operation::Condition(op) => format!("CONDITION {}", name(&op.value)),
            Operation::Return(op) => format!(
                "RETURN {}",
                op.values.iter().map(|v| name(v)).collect::<Vec<_>>().join(", ")
            ),
            Operation::InternalCall(op) => format!(
                "INTERNAL_CALL, {}({})",
                op.function,
                op.arguments.iter().map(|a| name(a)).collect::<Vec<_>>().join(", ")
            ),
            Operation::HighLevelCall(op) => format!(
                "HIGH_LEVEL_CALL, dest:{}, function:{}, arguments:[{}]",
                name(&op.destination.as_operand()),
                symbols.constant(op.function_name).as_str(),
                op.arguments.iter().map(|a| name(a)).collect::<Vec<_>>().join(", ")
            ),
            Operation::LowLevelCall(op) => op.display(symbols),
            Operation::LibraryCall(op) => format!(
                "LIBRARY_CALL, library:{}, function:{}",
                symbols.constant(op.library).as_str(),
                symbols.constant(op.function_name).as_str()
            ),
            Operation::EventCall(op) => format!(
                "EMIT {}({})",
                symbols.constant(op.name).as_str(),
                op.arguments.iter().map(|a| name(a)).collect::<Vec<_>>().join(", ")
            ),
            Operation::Send(op) => format!(
                "{} = SEND dest:{} value:{}",
                lhs(&op.result),
                name(&op.destination.as_operand()),
                name(&op.value)
            ),
            Operation::Transfer(op) => format!(
                "TRANSFER dest:{} value:{}",
                name(&op.destination.as_operand()),
                name(&op.value)
            ),
        }
    }
}
