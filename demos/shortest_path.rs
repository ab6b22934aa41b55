//! Builds a graph from an edge list and prints a few lookups and a shortest
//! path.
//!
//! Usage:
//!   cargo run --example shortest_path
//!   cargo run --example shortest_path -- -e 0,1,2 -e 1,2,2 -e 0,2,10 --to 2 -vv
//!   cargo run --example shortest_path -- --sparse --timings

use std::process;

use clap::Parser;
use densegraph::{
    AdjacencyMatrix, Edge, SparseWeightedGraph, WeightedGraph,
    tracing_support::{format_span_timings, init_tracing, span_timings},
};

const DEFAULT_EDGES: [&str; 5] = ["0,1,5", "4,8,9", "2,1,3", "10,5,2", "6,9,1"];

/// Find the lowest-weight path between two vertices of an undirected graph
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Edge as `u,v,weight`; may be repeated
    #[arg(short, long = "edge", value_parser = parse_edge)]
    edges: Vec<Edge>,

    /// Source vertex
    #[arg(long, default_value_t = 0)]
    from: usize,

    /// Target vertex
    #[arg(long, default_value_t = 2)]
    to: usize,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Store the graph in a hash map instead of a dense matrix
    #[arg(long)]
    sparse: bool,

    /// Print time spent in each traced operation
    #[arg(long)]
    timings: bool,
}

fn parse_edge(s: &str) -> Result<Edge, String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    let [u, v, weight] = parts[..] else {
        return Err(format!("expected `u,v,weight`, got `{s}`"));
    };
    let u = u.parse().map_err(|err| format!("bad vertex `{u}`: {err}"))?;
    let v = v.parse().map_err(|err| format!("bad vertex `{v}`: {err}"))?;
    let weight = weight
        .parse()
        .map_err(|err| format!("bad weight `{weight}`: {err}"))?;
    Ok(Edge::new(u, v, weight))
}

fn report<M: AdjacencyMatrix>(graph: &WeightedGraph<M>, from: usize, to: usize) {
    println!("Vertices: {}", graph.vertex_count());
    println!("Edges: {}", graph.edge_count());
    for edge in graph.edges() {
        println!("  {edge}");
    }
    for (a, b) in [(from, to), (to, from)] {
        match graph.weight(a, b) {
            Ok(weight) => println!("weight({a}, {b}) = {weight}"),
            Err(err) => println!("weight({a}, {b}): {err}"),
        }
    }
    match graph.shortest_path(from, to) {
        Some(path) => println!(
            "Shortest path {from} -> {to}: {:?} (total weight {})",
            path.vertices(),
            path.total_weight()
        ),
        None => println!("No path from {from} to {to}"),
    }
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    let edges = if args.edges.is_empty() {
        DEFAULT_EDGES
            .iter()
            .map(|s| parse_edge(s))
            .collect::<Result<Vec<_>, _>>()
            .unwrap_or_else(|err| {
                eprintln!("{err}");
                process::exit(2);
            })
    } else {
        args.edges
    };

    let result = if args.sparse {
        SparseWeightedGraph::with_edges(edges).map(|graph| report(&graph, args.from, args.to))
    } else {
        WeightedGraph::from_edges(edges).map(|graph| report(&graph, args.from, args.to))
    };
    if let Err(err) = result {
        eprintln!("Failed to build graph: {err}");
        process::exit(1);
    }

    if args.timings {
        println!("{}", format_span_timings(&span_timings()));
    }
}
