//! Data-flow feature: def-use consumer of the read/write contract

pub mod application;
pub mod domain;
pub mod ports;
