//! Team-process tool server — library crate.
//!
//! Re-exports all modules so the binary (`main.rs`) and the integration
//! tests (`tp-e2e-tests`) can build the router around their own state.

pub mod alignment;
pub mod catalog;
pub mod config;
pub mod error;
pub mod metrics;
pub mod resources;
pub mod routes;
pub mod state;
pub mod tools;
