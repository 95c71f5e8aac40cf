//! Spiral phase definitions

use serde::{Deserialize, Serialize};

/// The four phases of a spiral traversal
///
/// A pure function of cursor progress through the sequence: each phase
/// covers one quartile of [0, N).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SpiralPhase {
    /// First quartile, tight inner coils
    Emergence,
    /// Second quartile, the arms open up
    Expansion,
    /// Third quartile, settled rotation
    Coherence,
    /// Final quartile, approaching wraparound
    Dissolution,
}

impl SpiralPhase {
    /// Phase for a cursor at `index` in a sequence of `node_count` nodes
    ///
    /// `index` must be in [0, node_count) and `node_count` nonzero; the
    /// generator upholds both.
    pub fn from_progress(index: usize, node_count: usize) -> Self {
        let progress = index as f64 / node_count as f64;
        if progress < 0.25 {
            SpiralPhase::Emergence
        } else if progress < 0.50 {
            SpiralPhase::Expansion
        } else if progress < 0.75 {
            SpiralPhase::Coherence
        } else {
            SpiralPhase::Dissolution
        }
    }

    /// Get ANSI color code for terminal display
    pub fn color_code(&self) -> &'static str {
        match self {
            SpiralPhase::Emergence => "\x1b[90m",    // Gray
            SpiralPhase::Expansion => "\x1b[33m",    // Orange/Yellow
            SpiralPhase::Coherence => "\x1b[32m",    // Green
            SpiralPhase::Dissolution => "\x1b[36m",  // Cyan
        }
    }

    /// Reset ANSI color
    pub fn color_reset() -> &'static str {
        "\x1b[0m"
    }

    /// Get emoji for phase
    pub fn emoji(&self) -> &'static str {
        match self {
            SpiralPhase::Emergence => "🌱",
            SpiralPhase::Expansion => "🌀",
            SpiralPhase::Coherence => "🔆",
            SpiralPhase::Dissolution => "🌙",
        }
    }
}

impl std::fmt::Display for SpiralPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SpiralPhase::Emergence => "EMERGENCE",
            SpiralPhase::Expansion => "EXPANSION",
            SpiralPhase::Coherence => "COHERENCE",
            SpiralPhase::Dissolution => "DISSOLUTION",
        };
        write!(f, "{}", name)
    }
}
