//! coffee-types: domain model and ports shared by the coffee shop crates

pub mod domain;
pub mod ports;
