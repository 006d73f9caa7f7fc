//! Low-level external call
//!
//! The raw "send arbitrary bytes to an arbitrary address" primitive.
//! Destination/function-name/argument shape/kind are fixed at
//! construction; the value/gas riders and the call id are staged on
//! `LowLevelCallBuilder` and frozen by `build()`, so a consumer can never
//! observe a half-enriched operation.

use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::shared::models::{ConstantId, FunctionId, FunctionSymbols, Operand, VarId};

use super::call::{check_argument_count, constant_function_name, CallDestination};
use super::lvalue::OperationWithLValue;

/// Raw-call flavor, fixed at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LowLevelCallKind {
    Call,
    DelegateCall,
    StaticCall,
}

impl LowLevelCallKind {
    pub fn name(&self) -> &'static str {
        match self {
            LowLevelCallKind::Call => "call",
            LowLevelCallKind::DelegateCall => "delegatecall",
            LowLevelCallKind::StaticCall => "staticcall",
        }
    }
}

/// Opaque id disambiguating value/gas-bearing calls within one function
/// when lowering to assembly-level constructs
pub type CallId = u64;

/// Staged construction for `LowLevelCall`.
///
/// The IR builder creates this with the mandatory fields; the enrichment
/// pass installs the riders once gas/value expressions are known, then
/// consumes the builder into the immutable operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LowLevelCallBuilder {
    destination: CallDestination,
    function_name: ConstantId,
    argument_count: usize,
    arguments: Vec<Operand>,
    kind: LowLevelCallKind,
    result: Option<VarId>,
    call_value: Option<Operand>,
    call_gas: Option<Operand>,
    call_id: Option<CallId>,
}

impl LowLevelCallBuilder {
    /// Validate and stage a low-level call.
    ///
    /// Fails when the destination operand is a constant or the function
    /// name operand is not — both are invariant violations in the
    /// upstream IR builder.
    pub fn new(
        destination: Operand,
        function_name: Operand,
        arguments: Vec<Operand>,
        argument_count: usize,
        result: Option<VarId>,
        kind: LowLevelCallKind,
    ) -> Result<Self> {
        let destination = CallDestination::from_operand(destination)?;
        let function_name = constant_function_name(function_name)?;
        check_argument_count(argument_count, &arguments)?;
        Ok(Self {
            destination,
            function_name,
            argument_count,
            arguments,
            kind,
            result,
            call_value: None,
            call_gas: None,
            call_id: None,
        })
    }

    pub fn set_call_value(&mut self, value: Operand) {
        self.call_value = Some(value);
    }

    pub fn set_call_gas(&mut self, gas: Operand) {
        self.call_gas = Some(gas);
    }

    /// Assigned explicitly by the enrichment pass; setting a rider does
    /// not populate the id by itself.
    pub fn set_call_id(&mut self, id: CallId) {
        self.call_id = Some(id);
    }

    pub fn has_rider(&self) -> bool {
        self.call_value.is_some() || self.call_gas.is_some()
    }

    /// Freeze into the immutable operation
    pub fn build(self) -> LowLevelCall {
        LowLevelCall {
            destination: self.destination,
            function_name: self.function_name,
            argument_count: self.argument_count,
            arguments: self.arguments,
            kind: self.kind,
            result: self.result,
            call_value: self.call_value,
            call_gas: self.call_gas,
            call_id: self.call_id,
        }
    }
}

/// A raw external call whose callee logic is unknown to the analyzer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LowLevelCall {
    destination: CallDestination,
    function_name: ConstantId,
    argument_count: usize,
    arguments: Vec<Operand>,
    kind: LowLevelCallKind,
    result: Option<VarId>,
    call_value: Option<Operand>,
    call_gas: Option<Operand>,
    call_id: Option<CallId>,
}

impl LowLevelCall {
    pub fn destination(&self) -> CallDestination {
        self.destination
    }

    pub fn function_name(&self) -> ConstantId {
        self.function_name
    }

    pub fn argument_count(&self) -> usize {
        self.argument_count
    }

    pub fn arguments(&self) -> &[Operand] {
        &self.arguments
    }

    pub fn kind(&self) -> LowLevelCallKind {
        self.kind
    }

    pub fn call_value(&self) -> Option<Operand> {
        self.call_value
    }

    pub fn call_gas(&self) -> Option<Operand> {
        self.call_gas
    }

    pub fn call_id(&self) -> Option<CallId> {
        self.call_id
    }

    /// Conservatively true: the destination is an arbitrary contract
    /// whose fallback logic is unknown, and forwarding-all-gas semantics
    /// make gas-based mitigation unreliable to infer statically. The
    /// call-stack hook exists for context-sensitive refinements and is
    /// ignored here.
    pub fn can_reenter(&self, _call_stack: Option<&[FunctionId]>) -> bool {
        true
    }

    /// True iff the value rider is present. Pure over frozen state.
    pub fn can_send_eth(&self) -> bool {
        self.call_value.is_some()
    }

    /// Destination, gas/value riders (when present), then arguments,
    /// tuple temporaries flattened one level
    pub fn read(&self, symbols: &FunctionSymbols) -> Vec<Operand> {
        let mut all = vec![self.destination.as_operand()];
        all.extend(self.call_gas);
        all.extend(self.call_value);
        all.extend(self.arguments.iter().copied());
        symbols.unroll(all)
    }

    /// Diagnostic rendering; not a stable machine-parseable format
    pub fn display(&self, symbols: &FunctionSymbols) -> String {
        let mut txt = String::new();
        if let Some(lvalue) = self.result {
            let var = symbols.variable(lvalue);
            txt.push_str(&format!("{}({}) = ", var.name, var.ty));
        }
        let arguments = self
            .arguments
            .iter()
            .map(|a| symbols.operand_name(*a))
            .collect::<Vec<_>>()
            .join(", ");
        txt.push_str(&format!(
            "LOW_LEVEL_CALL, dest:{}, function:{}, arguments:[{}]",
            symbols.operand_name(self.destination.as_operand()),
            symbols.constant(self.function_name).as_str(),
            arguments
        ));
        if let Some(value) = self.call_value {
            txt.push_str(&format!(" value:{}", symbols.operand_name(value)));
        }
        if let Some(gas) = self.call_gas {
            txt.push_str(&format!(" gas:{}", symbols.operand_name(gas)));
        }
        txt
    }
}

impl OperationWithLValue for LowLevelCall {
    fn result(&self) -> Option<VarId> {
        self.result
    }
}
