//! Balanced-ternary code value type

use serde::{Deserialize, Serialize};

/// A fixed-width balanced-ternary code over the alphabet {T, 0, 1}
///
/// Every code of width L maps to exactly one integer in
/// [-(3^L-1)/2, (3^L-1)/2]. Instances are produced by
/// [`TernaryCodec::encode`](crate::core::TernaryCodec::encode), which
/// guarantees the alphabet and width invariants hold.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TernaryCode(String);

impl TernaryCode {
    /// Wrap an already-validated digit string
    pub(crate) fn new(digits: String) -> Self {
        Self(digits)
    }

    /// The digit string, most significant digit first
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Width in digits
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for TernaryCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for TernaryCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
