//! Shared layer

pub mod models;
