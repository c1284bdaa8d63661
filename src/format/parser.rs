//! Text formats: the `AB5, BC4` edge list and `A-B-C` routes.

use crate::types::{Edge, RailError, RailResult, Town};

/// Prefix allowed in front of an edge list, as in `Graph: AB5, BC4`.
const GRAPH_PREFIX: &str = "Graph:";

/// Parse a comma-separated edge list such as `AB5, BC4, CD8`.
///
/// Each token is two uppercase ASCII letters (source, destination) followed
/// by the decimal weight. Tokens may also be separated by newlines;
/// surrounding whitespace and empty tokens are ignored. Structural graph rules (self-loops, duplicates, zero weights)
/// are left to the graph builder.
pub fn parse_edge_list(text: &str) -> RailResult<Vec<Edge>> {
    let body = text.trim();
    let body = body.strip_prefix(GRAPH_PREFIX).unwrap_or(body);

    let mut edges = Vec::new();
    let tokens = body.split([',', '\n']).map(str::trim).filter(|t| !t.is_empty());
    for (position, token) in tokens.enumerate() {
        edges.push(parse_edge_token(position, token)?);
    }
    log::debug!("Parsed {} edges from edge list", edges.len());
    Ok(edges)
}

fn parse_edge_token(position: usize, token: &str) -> RailResult<Edge> {
    let fail = |reason: &str| RailError::Parse {
        position,
        token: token.to_string(),
        reason: reason.to_string(),
    };

    let bytes = token.as_bytes();
    if bytes.len() < 3 {
        return Err(fail("expected two town letters followed by a distance"));
    }
    if !bytes[0].is_ascii_uppercase() || !bytes[1].is_ascii_uppercase() {
        return Err(fail("town labels must be uppercase letters"));
    }
    let digits = &token[2..];
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(fail("distance must be a decimal number"));
    }
    let weight: u32 = digits
        .parse()
        .map_err(|_| fail("distance does not fit in 32 bits"))?;

    Ok(Edge::new(&token[0..1], &token[1..2], weight))
}

/// Parse a route such as `A-B-C` or `ABC` into towns.
///
/// Dashed routes may use multi-character labels; undashed routes are read
/// one letter per town.
pub fn parse_route(text: &str) -> RailResult<Vec<Town>> {
    let text = text.trim();
    let labels: Vec<String> = if text.contains('-') {
        text.split('-').map(|s| s.trim().to_string()).collect()
    } else {
        text.chars().map(String::from).collect()
    };

    if labels.is_empty() {
        return Err(RailError::Parse {
            position: 0,
            token: text.to_string(),
            reason: "route names no towns".to_string(),
        });
    }
    for (position, label) in labels.iter().enumerate() {
        if label.is_empty() || !label.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(RailError::Parse {
                position,
                token: label.clone(),
                reason: "town labels must be letters or digits".to_string(),
            });
        }
    }
    Ok(labels.into_iter().map(Town::from).collect())
}
