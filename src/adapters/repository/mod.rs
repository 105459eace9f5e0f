//! Repository Adapters - `BarDatabase` Implementations
//!
//! Implements the platform storage port on top of the feeder port.
//! Row conversion is kept separate from the request routing.

pub mod convert;
pub mod feeder_repository;

pub use feeder_repository::FeederRepository;
