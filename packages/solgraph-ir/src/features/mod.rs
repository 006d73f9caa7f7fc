//! Feature modules

pub mod data_flow;
pub mod operations;
