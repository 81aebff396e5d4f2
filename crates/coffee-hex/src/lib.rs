//! coffee-hex: hexagonal coffee shop API library (core + inbound HTTP)

pub mod config;
pub mod errors;

pub mod application;

pub use coffee_types::{domain, ports};

pub mod inbound; // HTTP adapter (server + handlers)
