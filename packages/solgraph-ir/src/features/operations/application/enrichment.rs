//! Call enrichment pass
//!
//! Single sequential pass run strictly after IR construction and before
//! any dataflow consumer. Installs value/gas rider expressions on staged
//! low-level calls and assigns a call id, from a run-scoped monotonic
//! source, to every call carrying a rider — the id disambiguates
//! value/gas-bearing calls within one function when lowering to
//! assembly-level constructs.

use std::sync::atomic::{AtomicU64, Ordering};

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::features::operations::domain::{
    CallId, DraftBody, DraftOp, FunctionBody, Operation,
};
use crate::shared::models::Operand;

/// Value/gas expressions for one call instruction, keyed by its index in
/// the draft body
#[derive(Debug, Clone, Copy, Default)]
pub struct CallRiders {
    pub value: Option<Operand>,
    pub gas: Option<Operand>,
}

/// Monotonically-unique call-id source, scoped to one analysis run
#[derive(Debug, Default)]
pub struct CallIdSource {
    next: AtomicU64,
}

impl CallIdSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&self) -> CallId {
        self.next.fetch_add(1, Ordering::Relaxed)
    }
}

/// The enrichment pass
#[derive(Debug, Default)]
pub struct EnrichCallsPass {
    ids: CallIdSource,
}

impl EnrichCallsPass {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume a draft body, installing riders where known, and freeze it
    /// into the immutable `FunctionBody`.
    pub fn run(&self, draft: DraftBody, riders: &FxHashMap<usize, CallRiders>) -> FunctionBody {
        let function_id = draft.function_id;
        let symbols = draft.symbols;
        let mut instructions = Vec::with_capacity(draft.ops.len());

        for (index, op) in draft.ops.into_iter().enumerate() {
            match op {
                DraftOp::Ready(op) => instructions.push(op),
                DraftOp::PendingLowLevelCall(mut builder) => {
                    if let Some(r) = riders.get(&index) {
                        if let Some(value) = r.value {
                            builder.set_call_value(value);
                        }
                        if let Some(gas) = r.gas {
                            builder.set_call_gas(gas);
                        }
                    }
                    if builder.has_rider() {
                        let id = self.ids.next_id();
                        builder.set_call_id(id);
                        debug!(function = %function_id, index, call_id = id, "assigned call id");
                    }
                    instructions.push(Operation::LowLevelCall(builder.build()));
                }
            }
        }

        debug!(
            function = %function_id,
            instructions = instructions.len(),
            "enrichment complete"
        );
        FunctionBody {
            function_id,
            symbols,
            instructions,
        }
    }
}
