//! Adapters Layer - Hexagonal Architecture Outer Ring
//!
//! Implements the port traits defined in `crate::ports`.
//!
//! Adapter categories:
//! - `feeder`: Feeder service implementations (JSONL replay)
//! - `repository`: The read-only `BarDatabase` over the feeder port

pub mod feeder;
pub mod repository;
