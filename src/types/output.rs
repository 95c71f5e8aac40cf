//! Output structures for terminal display

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{SpiralNode, SpiralPhase, TernaryCode};

/// Output record for a codec operation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodeOutput {
    /// Timestamp
    pub timestamp: DateTime<Utc>,
    /// Decimal value
    pub value: i64,
    /// Balanced-ternary code
    pub code: TernaryCode,
    /// Code width in digits
    pub length: usize,
}

impl CodeOutput {
    /// Create new output
    pub fn new(value: i64, code: TernaryCode) -> Self {
        let length = code.len();
        Self {
            timestamp: Utc::now(),
            value,
            code,
            length,
        }
    }

    /// Format for parseable output (no colors)
    pub fn to_parseable_string(&self) -> String {
        format!(
            "value={} | code={} | length={}",
            self.value, self.code, self.length
        )
    }

    /// Format for terminal display (with colors)
    pub fn to_terminal_string(&self) -> String {
        format!(
            "\x1b[32m◈ {} ⇄ {}\x1b[0m  \x1b[90m({} digits)\x1b[0m",
            self.value, self.code, self.length
        )
    }
}

/// Output record for a spiral traversal step
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeOutput {
    /// Timestamp
    pub timestamp: DateTime<Utc>,
    /// The node under the cursor
    pub node: SpiralNode,
    /// Phase label derived from cursor progress
    pub phase: SpiralPhase,
    /// Total nodes in the sequence
    pub node_count: usize,
}

impl NodeOutput {
    /// Create new output
    pub fn new(node: SpiralNode, phase: SpiralPhase, node_count: usize) -> Self {
        Self {
            timestamp: Utc::now(),
            node,
            phase,
            node_count,
        }
    }

    /// Format for parseable output (no colors)
    pub fn to_parseable_string(&self) -> String {
        format!(
            "i={}/{} | x={:.3} y={:.3} | r={:.3} | theta={:.3} | qf={:.4} | phase={}",
            self.node.index,
            self.node_count,
            self.node.x,
            self.node.y,
            self.node.radius,
            self.node.theta,
            self.node.quantum_factor,
            self.phase
        )
    }

    /// Format for terminal display (with colors)
    pub fn to_terminal_string(&self) -> String {
        let color = self.phase.color_code();
        let reset = SpiralPhase::color_reset();
        format!(
            "{}{} [{}/{}] x={:.3} y={:.3} | r={:.3} | qf={:.4} | {}{}",
            color,
            self.phase.emoji(),
            self.node.index,
            self.node_count,
            self.node.x,
            self.node.y,
            self.node.radius,
            self.node.quantum_factor,
            self.phase,
            reset
        )
    }
}
