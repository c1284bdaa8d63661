//! Fluent API for building RailGraph instances.

use crate::types::{Edge, RailError, RailResult, Town};

use super::RailGraph;

/// Fluent builder for constructing a RailGraph.
///
/// Weights are taken as signed integers so that bad input surfaces as
/// [`RailError::InvalidWeight`] at build time instead of wrapping silently.
pub struct GraphBuilder {
    towns: Vec<Town>,
    routes: Vec<(Town, Town, i64)>,
}

impl GraphBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self {
            towns: Vec::new(),
            routes: Vec::new(),
        }
    }

    /// Register a town that may have no routes.
    pub fn add_town(&mut self, town: impl Into<Town>) -> &mut Self {
        self.towns.push(town.into());
        self
    }

    /// Add a one-way route.
    pub fn link(&mut self, from: impl Into<Town>, to: impl Into<Town>, weight: i64) -> &mut Self {
        self.routes.push((from.into(), to.into(), weight));
        self
    }

    /// Add already-typed edges, e.g. the output of the edge-list parser.
    pub fn extend(&mut self, edges: impl IntoIterator<Item = Edge>) -> &mut Self {
        for edge in edges {
            self.routes
                .push((edge.source, edge.target, i64::from(edge.weight)));
        }
        self
    }

    /// Validate every route and build the final RailGraph.
    pub fn build(self) -> RailResult<RailGraph> {
        let mut edges = Vec::with_capacity(self.routes.len());
        for (from, to, weight) in self.routes {
            let weight = match u32::try_from(weight) {
                Ok(w) if w > 0 => w,
                _ => return Err(RailError::InvalidWeight { from, to, weight }),
            };
            edges.push(Edge {
                source: from,
                target: to,
                weight,
            });
        }
        RailGraph::from_parts(self.towns, edges)
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
