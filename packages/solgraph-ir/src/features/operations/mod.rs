//! Operation feature: the IR instruction model

pub mod application;
pub mod domain;
