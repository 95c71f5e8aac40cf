//! Spiral node record

use serde::{Deserialize, Serialize};

/// One point on the golden-angle spiral
///
/// Every field is a pure function of `index` and the module constants;
/// no node depends on any other node.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpiralNode {
    /// Position in the sequence, 0-based
    pub index: usize,
    /// Planar x: radius * cos(theta)
    pub x: f64,
    /// Planar y: radius * sin(theta)
    pub y: f64,
    /// Rotation in radians: index * GOLDEN_ANGLE
    pub theta: f64,
    /// Radial distance: sqrt(index) * scale
    pub radius: f64,
    /// Golden-ratio power: PHI^(index / 10)
    pub phi_n: f64,
    /// Exponential decay weight: exp(-index * 0.15), in (0, 1]
    pub quantum_factor: f64,
}
