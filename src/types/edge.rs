//! The directed, weighted rail segment.

use serde::Serialize;

use super::Town;

/// A one-way segment from `source` to `target`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Edge {
    /// Town the segment departs from.
    pub source: Town,
    /// Town the segment arrives at.
    pub target: Town,
    /// Distance travelled along the segment. Always positive.
    pub weight: u32,
}

impl Edge {
    /// Create a new edge. Validation happens when the graph is built.
    pub fn new(source: impl Into<Town>, target: impl Into<Town>, weight: u32) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            weight,
        }
    }
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}{}", self.source, self.target, self.weight)
    }
}
