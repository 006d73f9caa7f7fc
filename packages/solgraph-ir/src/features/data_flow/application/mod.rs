//! Data-flow use cases

pub mod build_def_use;

pub use build_def_use::LastDefAnalyzer;
