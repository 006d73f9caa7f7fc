/*
 * Solgraph IR - typed instruction set for smart-contract analysis
 *
 * Feature-First Hexagonal Architecture:
 * - shared/    : Operand model (variables, constants, builtins, symbols)
 * - features/  : Vertical slices (operations → enrichment → data_flow)
 *
 * The IR exists purely to make analysis tractable: operations are data,
 * every instruction kind answers the same read-set/write-set queries, and
 * dangerous capabilities (raw external call, ether movement, reentrancy)
 * are first-class boolean facts rather than string inspection.
 */

/// Shared models and utilities
pub mod shared;

/// Feature modules
pub mod features;

/// Error types
pub mod errors;

pub use errors::{Result, SolgraphError};

pub use shared::models::{
    BuiltinVariable, Constant, ConstantId, ConstantValue, ElementaryType, FunctionId,
    FunctionSymbols, Operand, StorageLocation, Type, VarId, Variable, VariableKind,
};

pub use features::operations::application::{CallIdSource, CallRiders, EnrichCallsPass};
pub use features::operations::domain::{
    Assignment, Binary, BinaryType, CallDestination, CallId, Condition, DraftBody, DraftOp,
    EventCall, FunctionBody, HighLevelCall, Index, InternalCall, LibraryCall, LowLevelCall,
    LowLevelCallBuilder, LowLevelCallKind, Member, Operation, OperationWithLValue, Return, Send,
    Transfer, TypeConversion, Unary, UnaryType,
};

pub use features::data_flow::application::LastDefAnalyzer;
pub use features::data_flow::domain::{
    DefUseGraph, DefUseNode, DefUseNodeKind, FunctionDataFlow, ReadWrite, SecurityFacts,
};
pub use features::data_flow::ports::DefUseAnalyzer;
