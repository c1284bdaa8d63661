//! Walk primitives: bounded depth-first enumeration and first-hop Dijkstra.
//!
//! Both work in town-id space. Neither counts the empty walk: every walk
//! they report has taken at least one segment.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use super::RailGraph;

/// Limit that keeps a depth-first walk enumeration finite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkBound {
    /// Walks of at most this many segments.
    Stops(usize),
    /// Walks whose total distance stays strictly below this value.
    DistanceBelow(u64),
}

impl WalkBound {
    /// Whether a walk that has taken `stops` segments may take one more,
    /// arriving at `next_distance`.
    pub fn allows(&self, stops: usize, next_distance: u64) -> bool {
        match *self {
            Self::Stops(max) => stops < max,
            Self::DistanceBelow(limit) => next_distance < limit,
        }
    }
}

/// Enumerate every walk from `start` permitted by `bound`.
///
/// `visit` receives each walk (as the full town-id path, start included) and
/// its distance, in depth-first order with neighbors sorted by label.
/// Towns and segments may repeat. The walk is driven by an explicit stack,
/// so deep bounds cost heap memory proportional to the walk length only.
pub(crate) fn walk_depth_first<V>(graph: &RailGraph, start: usize, bound: WalkBound, mut visit: V)
where
    V: FnMut(&[usize], u64),
{
    let mut path = vec![start];
    // One frame per town on `path`: (next hop index to try, distance so far).
    let mut frames: Vec<(usize, u64)> = vec![(0, 0)];

    while let Some(stops) = frames.len().checked_sub(1) {
        let (next_hop, distance) = frames[stops];
        let hops = graph.hops_from(path[stops]);
        let Some(hop) = hops.get(next_hop).copied() else {
            frames.pop();
            path.pop();
            continue;
        };
        frames[stops].0 += 1;

        let next = distance + u64::from(hop.weight);
        if !bound.allows(stops, next) {
            continue;
        }
        path.push(hop.target);
        visit(path.as_slice(), next);
        frames.push((0, next));
    }
}

/// Shortest walk of at least one segment from `source` to `target`.
///
/// The source is never settled at distance zero; the queue is seeded with its
/// outgoing segments instead, so `source == target` yields the shortest cycle
/// through it. Returns the distance and the town-id path.
pub(crate) fn first_hop_dijkstra(
    graph: &RailGraph,
    source: usize,
    target: usize,
) -> Option<(u64, Vec<usize>)> {
    // (distance, town, parent); a `None` parent means the entry was seeded from `source`.
    let mut heap: BinaryHeap<Reverse<(u64, usize, Option<usize>)>> = BinaryHeap::new();
    let mut settled: Vec<Option<Option<usize>>> = vec![None; graph.town_count()];

    for hop in graph.hops_from(source) {
        heap.push(Reverse((u64::from(hop.weight), hop.target, None)));
    }

    while let Some(Reverse((distance, town, parent))) = heap.pop() {
        if town == target {
            return Some((distance, trace_path(&settled, source, town, parent)));
        }
        if settled[town].is_some() {
            continue;
        }
        settled[town] = Some(parent);

        for hop in graph.hops_from(town) {
            if settled[hop.target].is_none() {
                let next = distance + u64::from(hop.weight);
                heap.push(Reverse((next, hop.target, Some(town))));
            }
        }
    }

    None
}

fn trace_path(
    settled: &[Option<Option<usize>>],
    source: usize,
    end: usize,
    parent: Option<usize>,
) -> Vec<usize> {
    let mut path = vec![end];
    let mut cursor = parent;
    while let Some(town) = cursor {
        path.push(town);
        cursor = settled[town].flatten();
    }
    path.push(source);
    path.reverse();
    path
}
