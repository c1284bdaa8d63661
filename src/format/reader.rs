//! Reads edge-list input into an in-memory graph.

use std::io::Read;
use std::path::Path;

use crate::graph::{GraphBuilder, RailGraph};
use crate::types::RailResult;

use super::parser::parse_edge_list;

/// Reader for textual edge lists.
pub struct GraphReader;

impl GraphReader {
    /// Read an edge-list file into a RailGraph.
    pub fn read_from_file(path: &Path) -> RailResult<RailGraph> {
        let text = std::fs::read_to_string(path)?;
        log::debug!("Read {} bytes from {}", text.len(), path.display());
        Self::parse(&text)
    }

    /// Read from any reader into a RailGraph.
    pub fn read_from(reader: &mut impl Read) -> RailResult<RailGraph> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Self::parse(&text)
    }

    /// Parse an edge list held in memory.
    pub fn parse(text: &str) -> RailResult<RailGraph> {
        let mut builder = GraphBuilder::new();
        builder.extend(parse_edge_list(text)?);
        builder.build()
    }
}
