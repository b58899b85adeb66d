//! Question oracle adapters.
//!
//! - `LlamaOracle` - HTTP client for the real text-generation service
//! - `MockOracle` - scripted test double

mod llama;
mod mock;

pub use llama::{LlamaConfig, LlamaOracle};
pub use mock::{MockFailure, MockOracle, MockReply};
