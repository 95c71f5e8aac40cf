//! Core logic for Lucid-0

mod spiral;
mod ternary;

pub use spiral::{generate_nodes, node_at, SpiralConfig, SpiralGenerator};
pub use ternary::TernaryCodec;
