//! In-memory rail network and the walk primitives the queries share.

pub mod builder;
pub mod rail_graph;
pub mod traversal;

pub use builder::GraphBuilder;
pub use rail_graph::RailGraph;
pub use traversal::WalkBound;
