//! Call family
//!
//! Shared shape for operations that transfer control to another callable
//! unit: destination + ordered arguments + optional result. A call
//! destination is always a runtime value — `CallDestination` encodes
//! "never a Constant" in the type, and constructors reject constant
//! destinations instead of coercing them (a literal callee address is
//! represented upstream as a variable wrapping that literal, so points-to
//! reasoning can key destinations by variable identity).

use serde::{Deserialize, Serialize};

use crate::errors::{Result, SolgraphError};
use crate::shared::models::{
    BuiltinVariable, ConstantId, FunctionId, FunctionSymbols, Operand, VarId,
};

use super::lvalue::OperationWithLValue;

/// Runtime-referenceable call target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CallDestination {
    Variable(VarId),
    Builtin(BuiltinVariable),
}

impl CallDestination {
    /// Validate a generic operand as a call destination.
    ///
    /// Fails on constants: a malformed destination is an IR-builder bug,
    /// surfaced immediately rather than silently coerced.
    pub fn from_operand(op: Operand) -> Result<Self> {
        match op {
            Operand::Variable(id) => Ok(CallDestination::Variable(id)),
            Operand::Builtin(b) => Ok(CallDestination::Builtin(b)),
            Operand::Constant(_) => Err(SolgraphError::InvalidDestination {
                found: operand_kind_name(op).to_string(),
            }),
        }
    }

    pub fn as_operand(&self) -> Operand {
        match self {
            CallDestination::Variable(id) => Operand::Variable(*id),
            CallDestination::Builtin(b) => Operand::Builtin(*b),
        }
    }
}

pub(crate) fn operand_kind_name(op: Operand) -> &'static str {
    match op {
        Operand::Variable(_) => "variable",
        Operand::Constant(_) => "constant",
        Operand::Builtin(_) => "builtin",
    }
}

/// Validate a function-name operand: must be a constant signature
pub(crate) fn constant_function_name(op: Operand) -> Result<ConstantId> {
    match op {
        Operand::Constant(id) => Ok(id),
        other => Err(SolgraphError::InvalidFunctionName {
            found: operand_kind_name(other).to_string(),
        }),
    }
}

/// Declared argument count must match the argument list
pub(crate) fn check_argument_count(expected: usize, arguments: &[Operand]) -> Result<()> {
    if arguments.len() != expected {
        return Err(SolgraphError::ArgumentCountMismatch {
            expected,
            actual: arguments.len(),
        });
    }
    Ok(())
}

/// Call to a function of the same contract; resolved statically, so there
/// is no runtime destination operand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InternalCall {
    pub function: FunctionId,
    pub function_name: ConstantId,
    pub argument_count: usize,
    pub arguments: Vec<Operand>,
    pub result: Option<VarId>,
}

impl InternalCall {
    pub fn new(
        function: FunctionId,
        function_name: Operand,
        arguments: Vec<Operand>,
        argument_count: usize,
        result: Option<VarId>,
    ) -> Result<Self> {
        let function_name = constant_function_name(function_name)?;
        check_argument_count(argument_count, &arguments)?;
        Ok(Self {
            function,
            function_name,
            argument_count,
            arguments,
            result,
        })
    }

    pub fn read(&self, symbols: &FunctionSymbols) -> Vec<Operand> {
        symbols.unroll(self.arguments.iter().copied())
    }
}

impl OperationWithLValue for InternalCall {
    fn result(&self) -> Option<VarId> {
        self.result
    }
}

/// Typed external message call to a known interface
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighLevelCall {
    pub destination: CallDestination,
    pub function_name: ConstantId,
    pub argument_count: usize,
    pub arguments: Vec<Operand>,
    pub result: Option<VarId>,
    pub call_value: Option<Operand>,
    pub call_gas: Option<Operand>,
}

impl HighLevelCall {
    pub fn new(
        destination: Operand,
        function_name: Operand,
        arguments: Vec<Operand>,
        argument_count: usize,
        result: Option<VarId>,
    ) -> Result<Self> {
        let destination = CallDestination::from_operand(destination)?;
        let function_name = constant_function_name(function_name)?;
        check_argument_count(argument_count, &arguments)?;
        Ok(Self {
            destination,
            function_name,
            argument_count,
            arguments,
            result,
            call_value: None,
            call_gas: None,
        })
    }

    pub fn with_value(mut self, value: Operand) -> Self {
        self.call_value = Some(value);
        self
    }

    pub fn with_gas(mut self, gas: Operand) -> Self {
        self.call_gas = Some(gas);
        self
    }

    pub fn read(&self, symbols: &FunctionSymbols) -> Vec<Operand> {
        let mut all = vec![self.destination.as_operand()];
        all.extend(self.call_gas);
        all.extend(self.call_value);
        all.extend(self.arguments.iter().copied());
        symbols.unroll(all)
    }

    /// The callee interface is known but its implementation is not; any
    /// external message call is a reentrancy surface.
    pub fn can_reenter(&self, _call_stack: Option<&[FunctionId]>) -> bool {
        true
    }

    pub fn can_send_eth(&self) -> bool {
        self.call_value.is_some()
    }
}

impl OperationWithLValue for HighLevelCall {
    fn result(&self) -> Option<VarId> {
        self.result
    }
}

/// Delegated call into library code; executes in the caller's context,
/// so it neither moves value nor opens a reentrancy surface of its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibraryCall {
    /// Library name (fixed at compile time)
    pub library: ConstantId,
    pub function_name: ConstantId,
    pub argument_count: usize,
    pub arguments: Vec<Operand>,
    pub result: Option<VarId>,
}

impl LibraryCall {
    pub fn new(
        library: ConstantId,
        function_name: Operand,
        arguments: Vec<Operand>,
        argument_count: usize,
        result: Option<VarId>,
    ) -> Result<Self> {
        let function_name = constant_function_name(function_name)?;
        check_argument_count(argument_count, &arguments)?;
        Ok(Self {
            library,
            function_name,
            argument_count,
            arguments,
            result,
        })
    }

    pub fn read(&self, symbols: &FunctionSymbols) -> Vec<Operand> {
        symbols.unroll(self.arguments.iter().copied())
    }
}

impl OperationWithLValue for LibraryCall {
    fn result(&self) -> Option<VarId> {
        self.result
    }
}

/// Event emission; arguments are read, nothing is written
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventCall {
    pub name: ConstantId,
    pub arguments: Vec<Operand>,
}

impl EventCall {
    pub fn new(name: ConstantId, arguments: Vec<Operand>) -> Self {
        Self { name, arguments }
    }

    pub fn read(&self, symbols: &FunctionSymbols) -> Vec<Operand> {
        symbols.unroll(self.arguments.iter().copied())
    }
}

/// `send`: fixed-stipend value transfer reporting success in a bool
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Send {
    pub destination: CallDestination,
    pub value: Operand,
    pub result: VarId,
}

impl Send {
    pub fn new(destination: Operand, value: Operand, result: VarId) -> Result<Self> {
        let destination = CallDestination::from_operand(destination)?;
        Ok(Self {
            destination,
            value,
            result,
        })
    }

    pub fn read(&self, symbols: &FunctionSymbols) -> Vec<Operand> {
        symbols.unroll([self.destination.as_operand(), self.value])
    }

    /// The 2300-gas stipend rules out a callback at the execution level.
    pub fn can_reenter(&self, _call_stack: Option<&[FunctionId]>) -> bool {
        false
    }

    pub fn can_send_eth(&self) -> bool {
        true
    }
}

impl OperationWithLValue for Send {
    fn result(&self) -> Option<VarId> {
        Some(self.result)
    }
}

/// `transfer`: fixed-stipend value transfer, reverts on failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transfer {
    pub destination: CallDestination,
    pub value: Operand,
}

impl Transfer {
    pub fn new(destination: Operand, value: Operand) -> Result<Self> {
        let destination = CallDestination::from_operand(destination)?;
        Ok(Self { destination, value })
    }

    pub fn read(&self, symbols: &FunctionSymbols) -> Vec<Operand> {
        symbols.unroll([self.destination.as_operand(), self.value])
    }

    pub fn can_reenter(&self, _call_stack: Option<&[FunctionId]>) -> bool {
        false
    }

    pub fn can_send_eth(&self) -> bool {
        true
    }
}
