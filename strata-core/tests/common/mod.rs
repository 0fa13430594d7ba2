//! Shared helpers for the integration test suites.

use strata_core::StaticGraph;

/// Builds the 4-adjacency graph of a `rows` by `cols` grid, numbering
/// vertices row-major and edges in raster order (right edge, then down
/// edge, per vertex).
pub fn four_adjacency_graph(rows: usize, cols: usize) -> StaticGraph {
    let mut graph = StaticGraph::new(rows * cols);
    for row in 0..rows {
        for col in 0..cols {
            let vertex = row * cols + col;
            if col + 1 < cols {
                graph.add_edge(vertex, vertex + 1);
            }
            if row + 1 < rows {
                graph.add_edge(vertex, vertex + cols);
            }
        }
    }
    graph
}
