//! Textual input: edge lists, routes, and input files.

pub mod parser;
pub mod reader;

pub use parser::{parse_edge_list, parse_route};
pub use reader::GraphReader;
