//! Typed route queries, their answers, and the canonical problem set.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::{RouteDistance, Town};

/// Edge list of the sample network from the original problem statement.
pub const CANONICAL_GRAPH: &str = "AB5, BC4, CD8, DC8, DE6, AD5, CE2, EB3, AE7";

/// A single route question, as written in a config file.
///
/// ```toml
/// [[query]]
/// kind = "exact_stops"
/// from = "A"
/// to = "C"
/// stops = 4
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Query {
    /// Distance along exactly this sequence of towns.
    Distance { route: Vec<Town> },
    /// Walks with between 1 and `stops` stops.
    MaxStops { from: Town, to: Town, stops: usize },
    /// Walks with exactly `stops` stops.
    ExactStops { from: Town, to: Town, stops: usize },
    /// Length of the shortest walk.
    Shortest { from: Town, to: Town },
    /// Walks with total distance strictly below `limit`.
    DistanceBelow { from: Town, to: Town, limit: i64 },
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Distance { route } => {
                let labels: Vec<&str> = route.iter().map(|t| t.label()).collect();
                write!(f, "distance of route {}", labels.join("-"))
            }
            Self::MaxStops { from, to, stops } => {
                write!(f, "trips {} to {} with at most {} stops", from, to, stops)
            }
            Self::ExactStops { from, to, stops } => {
                write!(f, "trips {} to {} with exactly {} stops", from, to, stops)
            }
            Self::Shortest { from, to } => write!(f, "shortest route {} to {}", from, to),
            Self::DistanceBelow { from, to, limit } => {
                write!(f, "trips {} to {} shorter than {}", from, to, limit)
            }
        }
    }
}

/// Result of running a [`Query`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum QueryAnswer {
    /// A distance, or `NO SUCH ROUTE`.
    Route(RouteDistance),
    /// A number of walks.
    Count(usize),
}

impl fmt::Display for QueryAnswer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Route(d) => write!(f, "{}", d),
            Self::Count(n) => write!(f, "{}", n),
        }
    }
}

/// The ten questions of the original problem statement, in order.
pub fn canonical_queries() -> Vec<Query> {
    let route = |labels: &[&str]| Query::Distance {
        route: labels.iter().map(|&l| Town::from(l)).collect(),
    };
    vec![
        route(&["A", "B", "C"]),
        route(&["A", "D"]),
        route(&["A", "D", "C"]),
        route(&["A", "E", "B", "C", "D"]),
        route(&["A", "E", "D"]),
        Query::MaxStops {
            from: "C".into(),
            to: "C".into(),
            stops: 3,
        },
        Query::ExactStops {
            from: "A".into(),
            to: "C".into(),
            stops: 4,
        },
        Query::Shortest {
            from: "A".into(),
            to: "C".into(),
        },
        Query::Shortest {
            from: "B".into(),
            to: "B".into(),
        },
        Query::DistanceBelow {
            from: "C".into(),
            to: "C".into(),
            limit: 30,
        },
    ]
}
