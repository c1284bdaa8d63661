//! All data types for the kiwirail library.

pub mod edge;
pub mod error;
pub mod route;
pub mod town;

pub use edge::Edge;
pub use error::{RailError, RailResult};
pub use route::{RouteDistance, Trip, NO_SUCH_ROUTE};
pub use town::Town;
