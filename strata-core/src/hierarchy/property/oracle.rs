//! Reference oracles for the hierarchy property tests.
//!
//! A textbook sequential Kruskal provides the minimum spanning tree weight,
//! and a Floyd-Warshall-style sweep provides all-pairs minimax path weights.
//! Both intentionally share nothing with the builders under test beyond the
//! `(weight, edge id)` ordering.

use super::types::GraphFixture;

/// Total weight of a minimum spanning tree of the fixture, accepting edges
/// in `(weight, edge id)` order as the builders do.
pub(super) fn kruskal_total_weight(fixture: &GraphFixture) -> f64 {
    let mut order: Vec<usize> = (0..fixture.edges.len()).collect();
    order.sort_by(|&a, &b| fixture.weights[a].total_cmp(&fixture.weights[b]));

    let mut parent: Vec<usize> = (0..fixture.num_vertices).collect();
    let mut total = 0.0;
    for edge in order {
        let (u, v) = fixture.edges[edge];
        let root_u = find_root(&mut parent, u);
        let root_v = find_root(&mut parent, v);
        if root_u != root_v {
            parent[root_v] = root_u;
            total += fixture.weights[edge];
        }
    }
    total
}

/// All-pairs minimax path weights: entry `[x][y]` is the smallest possible
/// maximum edge weight over paths from `x` to `y`.
pub(super) fn minimax_path_matrix(fixture: &GraphFixture) -> Vec<Vec<f64>> {
    let n = fixture.num_vertices;
    let mut matrix = vec![vec![f64::INFINITY; n]; n];
    for (vertex, row) in matrix.iter_mut().enumerate() {
        row[vertex] = 0.0;
    }
    for (edge, &(u, v)) in fixture.edges.iter().enumerate() {
        let weight = fixture.weights[edge];
        matrix[u][v] = matrix[u][v].min(weight);
        matrix[v][u] = matrix[v][u].min(weight);
    }

    for via in 0..n {
        for from in 0..n {
            for to in 0..n {
                let through = matrix[from][via].max(matrix[via][to]);
                if through < matrix[from][to] {
                    matrix[from][to] = through;
                }
            }
        }
    }
    matrix
}

fn find_root(parent: &mut [usize], node: usize) -> usize {
    let mut current = node;
    while parent[current] != current {
        let grandparent = parent[parent[current]];
        parent[current] = grandparent;
        current = parent[current];
    }
    current
}
