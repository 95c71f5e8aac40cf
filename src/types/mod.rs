//! Core types for Lucid-0

mod code;
mod error;
mod node;
mod output;
mod phase;

pub use code::TernaryCode;
pub use error::CoreError;
pub use node::SpiralNode;
pub use output::{CodeOutput, NodeOutput};
pub use phase::SpiralPhase;
