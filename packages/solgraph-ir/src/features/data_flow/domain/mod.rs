//! Data-flow domain model

pub mod def_use;

pub use def_use::{
    DefUseGraph, DefUseNode, DefUseNodeKind, FunctionDataFlow, ReadWrite, SecurityFacts,
};
