//! Operation-level passes

pub mod enrichment;

pub use enrichment::{CallIdSource, CallRiders, EnrichCallsPass};
