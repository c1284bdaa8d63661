//! CLI command implementations.

use crate::engine::{Query, QueryAnswer, QueryEngine};
use crate::graph::RailGraph;
use crate::types::{RailResult, Town, Trip};

/// Which walks the `trips` command counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TripLimit {
    /// Between 1 and N stops.
    MaxStops(usize),
    /// Exactly N stops.
    ExactStops(usize),
    /// Total distance strictly below D.
    DistanceBelow(i64),
}

/// Display summary information about the network.
pub fn cmd_info(graph: &RailGraph, json: bool) -> RailResult<()> {
    if json {
        let routes: Vec<String> = graph.edges().iter().map(|e| e.to_string()).collect();
        let info = serde_json::json!({
            "towns": graph.towns(),
            "town_count": graph.town_count(),
            "route_count": graph.edge_count(),
            "routes": routes,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        println!("Towns: {}", graph.town_count());
        println!("Routes: {}", graph.edge_count());
        for town in graph.towns() {
            let out: Vec<String> = graph
                .neighbors(town)
                .map(|(to, w)| format!("{}({})", to, w))
                .collect();
            if out.is_empty() {
                println!("  {}: -", town);
            } else {
                println!("  {}: {}", town, out.join(" "));
            }
        }
    }
    Ok(())
}

/// Distance along an exact route.
pub fn cmd_distance(graph: &RailGraph, route: &[Town], json: bool) -> RailResult<()> {
    let distance = QueryEngine::new().distance(graph, route);
    if json {
        println!(
            "{}",
            serde_json::json!({"route": route, "distance": distance})
        );
    } else {
        println!("{}", distance);
    }
    Ok(())
}

/// Number of walks between two towns, without materializing any of them.
pub fn count_trips(graph: &RailGraph, from: &str, to: &str, limit: TripLimit) -> usize {
    let engine = QueryEngine::new();
    match limit {
        TripLimit::MaxStops(n) => engine.count_walks_max_stops(graph, from, to, n),
        TripLimit::ExactStops(n) => engine.count_walks_exact_stops(graph, from, to, n),
        TripLimit::DistanceBelow(d) => engine.count_walks_distance_lt(graph, from, to, d),
    }
}

/// Count (and optionally list) the walks between two towns.
pub fn cmd_trips(
    graph: &RailGraph,
    from: &Town,
    to: &Town,
    limit: TripLimit,
    list: bool,
    json: bool,
) -> RailResult<()> {
    if !list {
        let count = count_trips(graph, from, to, limit);
        if json {
            println!(
                "{}",
                serde_json::json!({"from": from, "to": to, "count": count})
            );
        } else {
            println!("{}", count);
        }
        return Ok(());
    }

    let engine = QueryEngine::new();
    let trips: Vec<Trip> = match limit {
        TripLimit::MaxStops(n) => engine.trips_max_stops(graph, from, to, n),
        TripLimit::ExactStops(n) => engine.trips_exact_stops(graph, from, to, n),
        TripLimit::DistanceBelow(d) => engine.trips_distance_lt(graph, from, to, d),
    };

    if json {
        let listed: Vec<serde_json::Value> = trips
            .iter()
            .map(|t| {
                serde_json::json!({
                    "route": t.to_string(),
                    "stops": t.stops(),
                    "distance": t.distance,
                })
            })
            .collect();
        let out = serde_json::json!({
            "from": from,
            "to": to,
            "count": trips.len(),
            "trips": listed,
        });
        println!("{}", out);
    } else {
        println!("{}", trips.len());
        for trip in &trips {
            println!(
                "  {} ({} stops, distance {})",
                trip,
                trip.stops(),
                trip.distance
            );
        }
    }
    Ok(())
}

/// Shortest walk between two towns.
pub fn cmd_shortest(
    graph: &RailGraph,
    from: &Town,
    to: &Town,
    show_route: bool,
    json: bool,
) -> RailResult<()> {
    let engine = QueryEngine::new();
    let distance = engine.shortest_distance(graph, from, to);
    let trip = if show_route {
        engine.shortest_route(graph, from, to)
    } else {
        None
    };

    if json {
        let mut out = serde_json::json!({"from": from, "to": to, "distance": distance});
        if show_route {
            out["route"] = serde_json::json!(trip.as_ref().map(|t| t.to_string()));
        }
        println!("{}", out);
    } else {
        println!("{}", distance);
        if let Some(trip) = trip {
            println!("  {}", trip);
        }
    }
    Ok(())
}

/// Run a list of queries, printing `Output #N: <answer>` for each.
pub fn cmd_report(graph: &RailGraph, queries: &[Query], json: bool) -> RailResult<()> {
    let engine = QueryEngine::new();
    let answers: Vec<QueryAnswer> = queries.iter().map(|q| engine.execute(graph, q)).collect();

    if json {
        let entries: Vec<serde_json::Value> = queries
            .iter()
            .zip(&answers)
            .enumerate()
            .map(|(i, (q, a))| {
                serde_json::json!({"output": i + 1, "query": q.to_string(), "answer": a})
            })
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&entries).unwrap_or_default()
        );
    } else {
        for line in report_lines(&answers) {
            println!("{}", line);
        }
    }
    Ok(())
}

/// Render answers the way the problem statement prints them.
pub fn report_lines(answers: &[QueryAnswer]) -> Vec<String> {
    answers
        .iter()
        .enumerate()
        .map(|(i, a)| format!("Output #{}: {}", i + 1, a))
        .collect()
}
