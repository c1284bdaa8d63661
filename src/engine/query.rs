//! Query executor — route distance, walk counting and shortest routes.

use crate::graph::traversal::{first_hop_dijkstra, walk_depth_first};
use crate::graph::{RailGraph, WalkBound};
use crate::types::{RouteDistance, Trip};

use super::plan::{Query, QueryAnswer};

/// Which walks, among those a bound allows, end a match.
#[derive(Debug, Clone, Copy)]
enum StopRule {
    /// Any number of stops the bound allows.
    Any,
    /// Exactly this many stops.
    Exactly(usize),
}

impl StopRule {
    fn accepts(&self, stops: usize) -> bool {
        match *self {
            Self::Any => true,
            Self::Exactly(n) => stops == n,
        }
    }
}

/// The query engine answers every route query over a read-only graph.
///
/// All queries are pure functions of the graph and their arguments.
/// Walks always take at least one segment: the empty walk from a town to
/// itself is never counted and never a shortest route.
pub struct QueryEngine;

impl QueryEngine {
    /// Create a new query engine.
    pub fn new() -> Self {
        Self
    }

    /// Total distance along exactly the given sequence of towns.
    ///
    /// A single town (or none) is distance 0, even an unknown one: a route of
    /// zero segments has nothing to look up. Any missing segment, including
    /// one touching an unknown town, makes the whole route `NoSuchRoute`.
    pub fn distance<S: AsRef<str>>(&self, graph: &RailGraph, route: &[S]) -> RouteDistance {
        let mut total: u64 = 0;
        for pair in route.windows(2) {
            match graph.weight(pair[0].as_ref(), pair[1].as_ref()) {
                Some(w) => total += u64::from(w),
                None => {
                    log::debug!(
                        "No route segment {} -> {}",
                        pair[0].as_ref(),
                        pair[1].as_ref()
                    );
                    return RouteDistance::NoSuchRoute;
                }
            }
        }
        RouteDistance::Distance(total)
    }

    /// Number of walks from `from` to `to` with between 1 and `max_stops` stops.
    pub fn count_walks_max_stops(
        &self,
        graph: &RailGraph,
        from: &str,
        to: &str,
        max_stops: usize,
    ) -> usize {
        let count = self.count_walks(graph, from, to, WalkBound::Stops(max_stops), StopRule::Any);
        log::debug!("Walks {} -> {} with at most {} stops: {}", from, to, max_stops, count);
        count
    }

    /// Number of walks from `from` to `to` with exactly `stops` stops.
    pub fn count_walks_exact_stops(
        &self,
        graph: &RailGraph,
        from: &str,
        to: &str,
        stops: usize,
    ) -> usize {
        let count = self.count_walks(
            graph,
            from,
            to,
            WalkBound::Stops(stops),
            StopRule::Exactly(stops),
        );
        log::debug!("Walks {} -> {} with exactly {} stops: {}", from, to, stops, count);
        count
    }

    /// Number of walks from `from` to `to` whose distance is strictly below `limit`.
    pub fn count_walks_distance_lt(
        &self,
        graph: &RailGraph,
        from: &str,
        to: &str,
        limit: i64,
    ) -> usize {
        let count = match distance_bound(limit) {
            Some(bound) => self.count_walks(graph, from, to, bound, StopRule::Any),
            None => 0,
        };
        log::debug!("Walks {} -> {} shorter than {}: {}", from, to, limit, count);
        count
    }

    /// Length of the shortest walk of at least one segment from `from` to `to`.
    ///
    /// For `from == to` this is the shortest cycle through the town.
    pub fn shortest_distance(&self, graph: &RailGraph, from: &str, to: &str) -> RouteDistance {
        let result: RouteDistance = self
            .shortest_route(graph, from, to)
            .map(|trip| trip.distance)
            .into();
        log::debug!("Shortest {} -> {}: {}", from, to, result);
        result
    }

    /// One shortest walk of at least one segment from `from` to `to`.
    pub fn shortest_route(&self, graph: &RailGraph, from: &str, to: &str) -> Option<Trip> {
        let (source, target) = self.endpoints(graph, from, to)?;
        let (distance, path) = first_hop_dijkstra(graph, source, target)?;
        Some(to_trip(graph, &path, distance))
    }

    /// Every walk counted by [`count_walks_max_stops`](Self::count_walks_max_stops).
    pub fn trips_max_stops(
        &self,
        graph: &RailGraph,
        from: &str,
        to: &str,
        max_stops: usize,
    ) -> Vec<Trip> {
        self.collect_trips(graph, from, to, WalkBound::Stops(max_stops), StopRule::Any)
    }

    /// Every walk counted by [`count_walks_exact_stops`](Self::count_walks_exact_stops).
    pub fn trips_exact_stops(
        &self,
        graph: &RailGraph,
        from: &str,
        to: &str,
        stops: usize,
    ) -> Vec<Trip> {
        self.collect_trips(graph, from, to, WalkBound::Stops(stops), StopRule::Exactly(stops))
    }

    /// Every walk counted by [`count_walks_distance_lt`](Self::count_walks_distance_lt).
    pub fn trips_distance_lt(
        &self,
        graph: &RailGraph,
        from: &str,
        to: &str,
        limit: i64,
    ) -> Vec<Trip> {
        match distance_bound(limit) {
            Some(bound) => self.collect_trips(graph, from, to, bound, StopRule::Any),
            None => Vec::new(),
        }
    }

    /// Run a typed query.
    pub fn execute(&self, graph: &RailGraph, query: &Query) -> QueryAnswer {
        match query {
            Query::Distance { route } => QueryAnswer::Route(self.distance(graph, route)),
            Query::MaxStops { from, to, stops } => {
                QueryAnswer::Count(self.count_walks_max_stops(graph, from, to, *stops))
            }
            Query::ExactStops { from, to, stops } => {
                QueryAnswer::Count(self.count_walks_exact_stops(graph, from, to, *stops))
            }
            Query::Shortest { from, to } => {
                QueryAnswer::Route(self.shortest_distance(graph, from, to))
            }
            Query::DistanceBelow { from, to, limit } => {
                QueryAnswer::Count(self.count_walks_distance_lt(graph, from, to, *limit))
            }
        }
    }

    fn count_walks(
        &self,
        graph: &RailGraph,
        from: &str,
        to: &str,
        bound: WalkBound,
        rule: StopRule,
    ) -> usize {
        let Some((source, target)) = self.endpoints(graph, from, to) else {
            return 0;
        };
        let mut count = 0;
        walk_depth_first(graph, source, bound, |path, distance| {
            let stops = path.len() - 1;
            if path[stops] == target && rule.accepts(stops) {
                log::trace!("Matched walk of {} stops, distance {}", stops, distance);
                count += 1;
            }
        });
        count
    }

    fn collect_trips(
        &self,
        graph: &RailGraph,
        from: &str,
        to: &str,
        bound: WalkBound,
        rule: StopRule,
    ) -> Vec<Trip> {
        let Some((source, target)) = self.endpoints(graph, from, to) else {
            return Vec::new();
        };
        let mut trips = Vec::new();
        walk_depth_first(graph, source, bound, |path, distance| {
            let stops = path.len() - 1;
            if path[stops] == target && rule.accepts(stops) {
                trips.push(to_trip(graph, path, distance));
            }
        });
        trips
    }

    /// Resolve both endpoints to town ids. Unknown towns have no walks.
    fn endpoints(&self, graph: &RailGraph, from: &str, to: &str) -> Option<(usize, usize)> {
        let source = graph.town_id(from);
        let target = graph.town_id(to);
        if source.is_none() {
            log::warn!("Unknown town in query: {:?}", from);
        }
        if target.is_none() {
            log::warn!("Unknown town in query: {:?}", to);
        }
        Some((source?, target?))
    }
}

impl Default for QueryEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Non-positive limits admit no walk at all.
fn distance_bound(limit: i64) -> Option<WalkBound> {
    u64::try_from(limit)
        .ok()
        .filter(|&l| l > 0)
        .map(WalkBound::DistanceBelow)
}

fn to_trip(graph: &RailGraph, path: &[usize], distance: u64) -> Trip {
    Trip {
        towns: path.iter().map(|&id| graph.town(id).clone()).collect(),
        distance,
    }
}
