//! LValue-producing capability
//!
//! Implemented by every operation kind that can write a result. An absent
//! result means the value is discarded, which is benign, not an error.

use crate::shared::models::VarId;

/// Capability trait for result-writing operations
pub trait OperationWithLValue {
    /// The unique variable written by this instruction, if any
    fn result(&self) -> Option<VarId>;
}
