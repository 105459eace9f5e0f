//! Ports Layer - Hexagonal Architecture Boundaries
//!
//! Defines the interfaces (traits) on both sides of the repository.
//! Adapters implement these traits.
//!
//! Port categories:
//! - `BarDatabase`: Storage contract exposed to the trading platform
//! - `FeederService`: External feeder service consumed by the repository

pub mod database;
pub mod feeder;
