//! Def-use domain model

use petgraph::graph::{DiGraph, NodeIndex};
use serde::{Deserialize, Serialize};

use crate::shared::models::{FunctionId, Operand, VarId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DefUseNodeKind {
    Definition,
    Use,
}

/// One operand occurrence at one instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefUseNode {
    pub instruction: usize,
    pub operand: Operand,
    pub kind: DefUseNodeKind,
}

/// Def-use graph: edges run from a definition to each reached use
pub type DefUseGraph = DiGraph<DefUseNode, ()>;

/// Per-instruction read/write sets, in program order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadWrite {
    pub reads: Vec<Operand>,
    pub write: Option<VarId>,
}

/// Boolean facts folded over a function's call operations
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecurityFacts {
    /// Some instruction opens a reentrancy surface
    pub has_reentrant_call: bool,
    /// Some instruction can move ether
    pub can_send_eth: bool,
}

/// Dataflow result for one function
#[derive(Debug)]
pub struct FunctionDataFlow {
    pub function_id: FunctionId,
    pub graph: DefUseGraph,
    pub read_write: Vec<ReadWrite>,
    pub facts: SecurityFacts,
}

impl FunctionDataFlow {
    /// Definition nodes for a variable, in program order
    pub fn definitions_of(&self, var: VarId) -> Vec<NodeIndex> {
        let mut defs: Vec<_> = self
            .graph
            .node_indices()
            .filter(|ix| {
                let node = &self.graph[*ix];
                node.kind == DefUseNodeKind::Definition && node.operand == Operand::Variable(var)
            })
            .collect();
        defs.sort_by_key(|ix| self.graph[*ix].instruction);
        defs
    }
}
