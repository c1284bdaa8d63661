//! High-level operations — the query engine and typed queries.

pub mod plan;
pub mod query;

pub use plan::{canonical_queries, Query, QueryAnswer, CANONICAL_GRAPH};
pub use query::QueryEngine;
