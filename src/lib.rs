//! Lucid-0: Reference implementation of the Lucid resonance core
//!
//! Two leaf components: CLI → TernaryCodec / SpiralGenerator → terminal output

pub mod core;
pub mod types;

// =============================================================================
// SPIRAL CONSTANTS [C] - From Lucid core v1.0
// =============================================================================

/// Golden ratio: (1 + sqrt(5)) / 2
pub const PHI: f64 = 1.618_033_988_749_895;

/// Golden angle in radians: 2π × (1 − 1/PHI), ~137.5°
pub const GOLDEN_ANGLE: f64 = 2.399_963_229_728_653;

/// Exponential decay rate for the per-node quantum factor
pub const QUANTUM_DAMPENING: f64 = 0.15;

/// phi_n uses the PHI^(i/10) convention; this is the divisor
pub const PHI_EXPONENT_DIVISOR: f64 = 10.0;

/// Default radial scale: r = sqrt(i) * scale
pub const DEFAULT_SCALE: f64 = 10.0;

/// Default node count for a spiral sequence
pub const DEFAULT_NODE_COUNT: usize = 50;

// =============================================================================
// CODEC CONSTANTS [C]
// =============================================================================

/// Standard code width in digits; 5 digits span [-121, 121]
pub const CODE_LENGTH: usize = 5;

// =============================================================================
// VERSION
// =============================================================================

pub const VERSION: &str = "1.0.0";
