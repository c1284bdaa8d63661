//! kiwirail — route queries over a one-way rail network.
//!
//! Towns are joined by directed, positively weighted segments. The query
//! engine answers route distances, walk counts bounded by stops or by
//! distance, and shortest routes over a graph that is read-only once built.

pub mod cli;
pub mod config;
pub mod engine;
pub mod format;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use config::{load_config, resolve_graph_source, GraphSource, RailConfig};
pub use engine::{canonical_queries, Query, QueryAnswer, QueryEngine, CANONICAL_GRAPH};
pub use format::{parse_edge_list, parse_route, GraphReader};
pub use graph::{GraphBuilder, RailGraph, WalkBound};
pub use types::{Edge, RailError, RailResult, RouteDistance, Town, Trip, NO_SUCH_ROUTE};
