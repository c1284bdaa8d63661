//! Configuration loading from file, environment, and CLI arguments.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::engine::{Query, CANONICAL_GRAPH};
use crate::format::GraphReader;
use crate::graph::RailGraph;
use crate::types::{RailError, RailResult};

/// Environment variable holding an inline edge list.
pub const GRAPH_ENV: &str = "KIWIRAIL_GRAPH";

/// CLI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RailConfig {
    /// Inline edge list, e.g. `"AB5, BC4"`.
    #[serde(default)]
    pub graph: Option<String>,
    /// Path to a file holding the edge list.
    #[serde(default)]
    pub graph_file: Option<PathBuf>,
    /// Output format ("text" or "json").
    #[serde(default = "default_format")]
    pub format: String,
    /// Log level.
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Queries run by the `report` command, in order.
    #[serde(default, rename = "query")]
    pub queries: Vec<Query>,
}

fn default_format() -> String {
    "text".to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for RailConfig {
    fn default() -> Self {
        Self {
            graph: None,
            graph_file: None,
            format: default_format(),
            log_level: default_log_level(),
            queries: Vec::new(),
        }
    }
}

/// Load configuration from a TOML file.
pub fn load_config(path: &Path) -> RailResult<RailConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        RailError::Config(format!(
            "Failed to read config file {}: {e}",
            path.display()
        ))
    })?;
    parse_config(&content)
}

/// Parse configuration from TOML text.
pub fn parse_config(content: &str) -> RailResult<RailConfig> {
    let config: RailConfig = toml::from_str(content)
        .map_err(|e| RailError::Config(format!("Failed to parse config: {e}")))?;
    match config.format.as_str() {
        "text" | "json" => Ok(config),
        other => Err(RailError::Config(format!(
            "Unknown output format {other:?}, expected \"text\" or \"json\""
        ))),
    }
}

/// Where the graph comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphSource {
    /// An edge list held in memory.
    Inline(String),
    /// An edge-list file.
    File(PathBuf),
}

impl GraphSource {
    /// Parse the edge list and build the graph.
    pub fn load(&self) -> RailResult<RailGraph> {
        match self {
            Self::Inline(text) => GraphReader::parse(text),
            Self::File(path) => GraphReader::read_from_file(path),
        }
    }
}

/// Resolve the graph source using priority order:
/// 1. Inline edge list (CLI `--graph`)
/// 2. Edge-list file (CLI `--graph-file`)
/// 3. `graph` then `graph_file` from the config file
/// 4. KIWIRAIL_GRAPH environment variable
/// 5. The canonical sample network
pub fn resolve_graph_source(
    inline: Option<&str>,
    file: Option<&Path>,
    config: &RailConfig,
) -> GraphSource {
    if let Some(text) = inline {
        return GraphSource::Inline(text.to_string());
    }
    if let Some(path) = file {
        return GraphSource::File(path.to_path_buf());
    }
    if let Some(text) = &config.graph {
        return GraphSource::Inline(text.clone());
    }
    if let Some(path) = &config.graph_file {
        return GraphSource::File(path.clone());
    }
    if let Ok(text) = std::env::var(GRAPH_ENV) {
        return GraphSource::Inline(text);
    }
    GraphSource::Inline(CANONICAL_GRAPH.to_string())
}
