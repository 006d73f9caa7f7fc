//! Last-def def-use builder
//!
//! Walks a frozen function body in program order, pulling each
//! instruction's read set and result. A use of variable v is linked to
//! the most recent definition of v (straight-line last-def; branch-aware
//! merging belongs to a CFG-level pass upstream of this crate's scope).

use petgraph::graph::NodeIndex;
use rustc_hash::FxHashMap;
use tracing::trace;

use crate::errors::Result;
use crate::features::data_flow::domain::{
    DefUseGraph, DefUseNode, DefUseNodeKind, FunctionDataFlow, ReadWrite, SecurityFacts,
};
use crate::features::data_flow::ports::DefUseAnalyzer;
use crate::features::operations::domain::FunctionBody;
use crate::shared::models::{Operand, VarId};

#[derive(Debug, Default)]
pub struct LastDefAnalyzer;

impl LastDefAnalyzer {
    pub fn new() -> Self {
        Self
    }
}

impl DefUseAnalyzer for LastDefAnalyzer {
    fn build(&self, body: &FunctionBody) -> Result<FunctionDataFlow> {
        let mut graph = DefUseGraph::new();
        let mut read_write = Vec::with_capacity(body.instructions.len());
        let mut facts = SecurityFacts::default();
        let mut last_def: FxHashMap<VarId, NodeIndex> = FxHashMap::default();

        for (instruction, op) in body.instructions() {
            let reads = op.read(&body.symbols);
            for operand in &reads {
                let use_node = graph.add_node(DefUseNode {
                    instruction,
                    operand: *operand,
                    kind: DefUseNodeKind::Use,
                });
                if let Some(var) = operand.as_variable() {
                    if let Some(def) = last_def.get(&var) {
                        graph.add_edge(*def, use_node, ());
                    }
                }
            }

            let write = op.result();
            if let Some(var) = write {
                let def_node = graph.add_node(DefUseNode {
                    instruction,
                    operand: Operand::Variable(var),
                    kind: DefUseNodeKind::Definition,
                });
                last_def.insert(var, def_node);
            }

            facts.has_reentrant_call |= op.can_reenter(None);
            facts.can_send_eth |= op.can_send_eth();

            trace!(
                function = %body.function_id,
                instruction,
                reads = reads.len(),
                writes = write.is_some(),
                "collected read/write sets"
            );
            read_write.push(ReadWrite { reads, write });
        }

        Ok(FunctionDataFlow {
            function_id: body.function_id.clone(),
            graph,
            read_write,
            facts,
        })
    }
}
