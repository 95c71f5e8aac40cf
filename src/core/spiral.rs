//! Golden-angle spiral generator: deterministic node sequence + traversal
//!
//! Node geometry:
//! - theta = i × GOLDEN_ANGLE
//! - r     = sqrt(i) × scale
//! - x, y  = polar → planar
//! - phi_n = PHI^(i/10)
//! - quantum_factor = exp(−i × 0.15)
//!
//! The node sequence is built once at construction and never mutated; the
//! cursor is the only mutable state and wraps at N.

use serde::{Deserialize, Serialize};

use crate::types::{CoreError, SpiralNode, SpiralPhase};
use crate::{
    DEFAULT_NODE_COUNT, DEFAULT_SCALE, GOLDEN_ANGLE, PHI, PHI_EXPONENT_DIVISOR,
    QUANTUM_DAMPENING,
};

/// Spiral generator configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SpiralConfig {
    /// Total nodes in the sequence, must be at least 1
    pub node_count: usize,
    /// Radial scale: r = sqrt(i) * scale
    pub scale: f64,
}

impl Default for SpiralConfig {
    fn default() -> Self {
        Self {
            node_count: DEFAULT_NODE_COUNT,
            scale: DEFAULT_SCALE,
        }
    }
}

/// Compute the node at `index` for a given radial scale
///
/// Pure function of the index and the module constants; the sequence is
/// reproducible by construction.
pub fn node_at(index: usize, scale: f64) -> SpiralNode {
    let i = index as f64;
    let theta = i * GOLDEN_ANGLE;
    let radius = i.sqrt() * scale;
    SpiralNode {
        index,
        x: radius * theta.cos(),
        y: radius * theta.sin(),
        theta,
        radius,
        phi_n: PHI.powf(i / PHI_EXPONENT_DIVISOR),
        quantum_factor: (-i * QUANTUM_DAMPENING).exp(),
    }
}

/// Generate the full node sequence for a configuration
///
/// Fails with `InvalidConfiguration` if the node count is zero or the
/// scale is not a finite positive number.
pub fn generate_nodes(config: SpiralConfig) -> Result<Vec<SpiralNode>, CoreError> {
    if config.node_count == 0 {
        return Err(CoreError::InvalidConfiguration {
            reason: "node_count must be at least 1",
        });
    }
    if !config.scale.is_finite() || config.scale <= 0.0 {
        return Err(CoreError::InvalidConfiguration {
            reason: "scale must be a finite positive number",
        });
    }
    Ok((0..config.node_count)
        .map(|i| node_at(i, config.scale))
        .collect())
}

/// Spiral generator: immutable node arena plus one traversal cursor
///
/// Multiple generators over the same configuration are independent; share
/// the node slice and create one generator per consumer when several
/// cursors are needed.
#[derive(Debug, Clone)]
pub struct SpiralGenerator {
    /// Configuration the sequence was built from
    config: SpiralConfig,
    /// The full node sequence, built once
    nodes: Vec<SpiralNode>,
    /// Traversal cursor, always in [0, node_count)
    current_index: usize,
}

impl SpiralGenerator {
    /// Create a generator, eagerly building all nodes
    pub fn new(config: SpiralConfig) -> Result<Self, CoreError> {
        let nodes = generate_nodes(config)?;
        Ok(Self {
            config,
            nodes,
            current_index: 0,
        })
    }

    /// Create a generator with `node_count` nodes at the default scale
    pub fn with_node_count(node_count: usize) -> Result<Self, CoreError> {
        Self::new(SpiralConfig {
            node_count,
            ..SpiralConfig::default()
        })
    }

    /// The node under the cursor
    pub fn current(&self) -> &SpiralNode {
        &self.nodes[self.current_index]
    }

    /// Step the cursor forward, wrapping at N, and return the new node
    pub fn advance(&mut self) -> &SpiralNode {
        self.current_index = (self.current_index + 1) % self.nodes.len();
        &self.nodes[self.current_index]
    }

    /// Move the cursor to `index mod N` (negative input normalizes into
    /// range) and return the node there
    pub fn seek(&mut self, index: i64) -> &SpiralNode {
        let n = self.nodes.len() as i64;
        self.current_index = index.rem_euclid(n) as usize;
        &self.nodes[self.current_index]
    }

    /// The full node sequence
    pub fn nodes(&self) -> &[SpiralNode] {
        &self.nodes
    }

    /// Number of nodes in the sequence
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Current cursor position
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Configuration the sequence was built from
    pub fn config(&self) -> SpiralConfig {
        self.config
    }

    /// Phase label for the current cursor position
    pub fn phase(&self) -> SpiralPhase {
        SpiralPhase::from_progress(self.current_index, self.nodes.len())
    }

    /// Move the cursor back to node 0
    pub fn reset(&mut self) {
        self.current_index = 0;
    }
}

// =============================================================================
// TESTS
// =============================================================================
