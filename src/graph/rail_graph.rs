//! Core graph structure — towns + one-way segments with adjacency indexes.

use std::collections::{BTreeSet, HashMap};

use crate::types::{Edge, RailError, RailResult, Town};

/// An outgoing segment in id space, used by the search algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Hop {
    pub target: usize,
    pub weight: u32,
}

/// Read-only rail network.
///
/// Towns are assigned dense ids in label order, so every per-town listing
/// (towns, edges, neighbors) comes out sorted by label and is stable for the
/// lifetime of the graph. There is no mutation after construction; share it
/// freely between threads.
#[derive(Debug, Clone)]
pub struct RailGraph {
    /// All towns, sorted by label. Index is the town id.
    towns: Vec<Town>,
    /// Label -> town id.
    ids: HashMap<Town, usize>,
    /// All edges, sorted by source then target.
    edges: Vec<Edge>,
    /// Id-space copy of `edges`, same order.
    hops: Vec<Hop>,
    /// Town id -> (start_index, count) in the edges vec.
    adjacency: Vec<(usize, usize)>,
    /// (source_id, target_id) -> weight.
    weights: HashMap<(usize, usize), u32>,
}

impl RailGraph {
    /// Build a graph from its edges plus any towns that have no edges.
    ///
    /// Fails on empty labels, self-loops, zero weights and duplicate ordered
    /// pairs.
    pub fn from_parts(
        towns: impl IntoIterator<Item = Town>,
        edges: Vec<Edge>,
    ) -> RailResult<Self> {
        let mut labels: BTreeSet<Town> = towns.into_iter().collect();
        for edge in &edges {
            if edge.source.is_empty() || edge.target.is_empty() {
                return Err(RailError::EmptyTownLabel);
            }
            if edge.source == edge.target {
                return Err(RailError::SelfLoop(edge.source.clone()));
            }
            if edge.weight == 0 {
                return Err(RailError::InvalidWeight {
                    from: edge.source.clone(),
                    to: edge.target.clone(),
                    weight: 0,
                });
            }
            labels.insert(edge.source.clone());
            labels.insert(edge.target.clone());
        }
        if labels.iter().any(|t| t.is_empty()) {
            return Err(RailError::EmptyTownLabel);
        }

        let towns: Vec<Town> = labels.into_iter().collect();
        let ids: HashMap<Town, usize> = towns
            .iter()
            .enumerate()
            .map(|(i, t)| (t.clone(), i))
            .collect();

        let mut edges = edges;
        edges.sort_by(|a, b| a.source.cmp(&b.source).then(a.target.cmp(&b.target)));

        let mut weights = HashMap::with_capacity(edges.len());
        let mut hops = Vec::with_capacity(edges.len());
        for edge in &edges {
            let from = ids[edge.source.label()];
            let to = ids[edge.target.label()];
            if weights.insert((from, to), edge.weight).is_some() {
                return Err(RailError::DuplicateEdge {
                    from: edge.source.clone(),
                    to: edge.target.clone(),
                });
            }
            hops.push(Hop {
                target: to,
                weight: edge.weight,
            });
        }

        let mut graph = Self {
            adjacency: vec![(0, 0); towns.len()],
            towns,
            ids,
            edges,
            hops,
            weights,
        };
        graph.rebuild_adjacency();

        log::debug!(
            "Built rail graph: {} towns, {} routes",
            graph.town_count(),
            graph.edge_count()
        );
        Ok(graph)
    }

    /// Number of towns.
    pub fn town_count(&self) -> usize {
        self.towns.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// All towns, sorted by label.
    pub fn towns(&self) -> &[Town] {
        &self.towns
    }

    /// All edges, sorted by source then target.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Whether the town is part of the network.
    pub fn contains(&self, town: &str) -> bool {
        self.ids.contains_key(town)
    }

    /// Weight of the direct segment from `from` to `to`, if one exists.
    pub fn weight(&self, from: &str, to: &str) -> Option<u32> {
        let from = self.town_id(from)?;
        let to = self.town_id(to)?;
        self.weight_by_id(from, to)
    }

    /// All edges leaving a town, sorted by destination label.
    /// Unknown towns have no edges.
    pub fn edges_from(&self, town: &str) -> &[Edge] {
        match self.town_id(town) {
            Some(id) => {
                let (start, count) = self.adjacency[id];
                &self.edges[start..start + count]
            }
            None => &[],
        }
    }

    /// Outgoing `(destination, weight)` pairs, sorted by destination label.
    pub fn neighbors<'a>(&'a self, town: &str) -> impl Iterator<Item = (&'a Town, u32)> + 'a {
        self.edges_from(town).iter().map(|e| (&e.target, e.weight))
    }

    pub(crate) fn town_id(&self, town: &str) -> Option<usize> {
        self.ids.get(town).copied()
    }

    pub(crate) fn town(&self, id: usize) -> &Town {
        &self.towns[id]
    }

    pub(crate) fn hops_from(&self, id: usize) -> &[Hop] {
        let (start, count) = self.adjacency[id];
        &self.hops[start..start + count]
    }

    pub(crate) fn weight_by_id(&self, from: usize, to: usize) -> Option<u32> {
        self.weights.get(&(from, to)).copied()
    }

    /// Rebuild the adjacency index from the sorted edge list.
    fn rebuild_adjacency(&mut self) {
        let mut i = 0;
        while i < self.edges.len() {
            let source = self.ids[self.edges[i].source.label()];
            let start = i;
            while i < self.edges.len() && self.edges[i].source == self.edges[start].source {
                i += 1;
            }
            self.adjacency[source] = (start, i - start);
        }
    }
}
