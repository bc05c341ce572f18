//! # Connector Layer
//!
//! Adapters binding the application interfaces to concrete transports.

pub mod adapter;

pub use adapter::*;
