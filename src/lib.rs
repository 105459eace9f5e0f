//! Feeder Bar Repository - Library Root
//!
//! A read-only market data repository that serves platform bars from an
//! external feeder service. Re-exports all modules for integration tests
//! and benchmarks.

pub mod adapters;
pub mod config;
pub mod domain;
pub mod error;
pub mod ports;

pub use error::RepositoryError;
