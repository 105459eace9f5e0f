//! Feeder Adapters - Implementations of the Feeder Port
//!
//! - `jsonl`: Replays feeder rows captured to JSON Lines files

pub mod jsonl;

pub use jsonl::JsonlFeeder;
