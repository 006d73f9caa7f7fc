//! Operation domain model

pub mod body;
pub mod call;
pub mod low_level_call;
pub mod lvalue;
pub mod operation;

pub use body::{DraftBody, DraftOp, FunctionBody};
pub use call::{
    CallDestination, EventCall, HighLevelCall, InternalCall, LibraryCall, Send, Transfer,
};
pub use low_level_call::{CallId, LowLevelCall, LowLevelCallBuilder, LowLevelCallKind};
pub use lvalue::OperationWithLValue;
pub use operation::{
    Assignment, Binary, BinaryType, Condition, Index, Member, Operation, Return, TypeConversion,
    Unary, UnaryType,
};
