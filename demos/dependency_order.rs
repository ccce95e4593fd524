//! Resolving a build order for a set of named packages.
//!
//! Run with `cargo run --example dependency_order`.

use anyhow::{Context, Result};
use pathgraph::{DiGraph, Edge, UnGraph};

fn main() -> Result<()> {
    println!("Package Build Order Example");
    println!("===========================");

    // An edge `a -> b` means "a must be built before b".
    let deps = [
        ("core", "io", 1),
        ("core", "fmt", 1),
        ("io", "net", 2),
        ("fmt", "log", 1),
        ("net", "http", 3),
        ("log", "http", 1),
        ("core", "cli", 1),
    ];
    let mut graph: DiGraph = deps.iter().map(|&(a, b, w)| Edge::new(a, b, w)).collect();
    graph.add_vertex("docs");

    println!("\n{} packages, {} dependencies:", graph.vertex_count(), graph.edge_count());
    for edge in graph.edges() {
        println!("  {edge}");
    }

    let order = graph
        .topological_sort()
        .context("dependency graph must be acyclic")?;
    println!("\nBuild order: {}", order.join(", "));

    let route = graph.path("core", "http")?;
    println!("Why does http need core? {}", render(&route));

    let from_core = graph.bfs("core")?;
    println!("Shortest chain core -> http: {}", render(&from_core.path_to("http")));
    println!("docs depends on core: {}", from_core.path_exists("docs"));

    // Introduce a circular dependency.
    graph.add_edge("http", "core", 1);
    match graph.topological_sort() {
        Ok(_) => println!("\nUnexpectedly still acyclic"),
        Err(err) => println!("\nAfter adding http -> core: {err}"),
    }

    // Group packages that share any dependency relation, ignoring direction.
    let mut undirected: UnGraph = deps.iter().map(|&(a, b, w)| Edge::new(a, b, w)).collect();
    undirected.add_vertex("docs");
    let components = undirected.label_components();
    println!("\n{} independent package groups:", components.count());
    for (label, members) in components.groups().iter().enumerate() {
        println!("  group {label}: {}", members.join(", "));
    }

    Ok(())
}

fn render(path: &[&str]) -> String {
    if path.is_empty() {
        "no path".to_owned()
    } else {
        path.join(" -> ")
    }
}
