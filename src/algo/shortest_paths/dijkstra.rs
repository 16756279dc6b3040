use fixedbitset::FixedBitSet;

use crate::matrix::SquareMatrix;

/// Distance of a vertex that has not been reached from the source.
pub(super) const INF: u64 = u64::MAX;

pub(super) struct Paths {
    pub dist: Vec<u64>,
    pub pred: Vec<Option<usize>>,
}

/// Runs the dense variant of Dijkstra's algorithm from `source`.
///
/// Instead of a priority queue, every round scans all unsettled vertices
/// for the minimum tentative distance, which is O(n²) overall. For the
/// adjacency matrix representation the scan is the intended trade-off, not
/// a placeholder for a heap.
pub(super) fn dijkstra(matrix: &SquareMatrix, source: usize) -> Paths {
    let n = matrix.side();

    let mut dist = vec![INF; n];
    let mut pred = vec![None; n];
    let mut settled = FixedBitSet::with_capacity(n);

    dist[source] = 0;

    for _ in 0..n {
        // Unsettled vertex with the minimum tentative distance. Ties are
        // broken by the ascending scan order.
        let mut vertex = None;
        let mut vertex_dist = INF;

        for (candidate, &d) in dist.iter().enumerate() {
            if !settled.contains(candidate) && d < vertex_dist {
                vertex = Some(candidate);
                vertex_dist = d;
            }
        }

        // Everything still unsettled is unreachable from the source.
        let Some(vertex) = vertex else {
            break;
        };

        settled.insert(vertex);

        for (neighbor, &weight) in matrix.row(vertex).iter().enumerate() {
            if weight == 0 {
                continue;
            }

            // Relaxation. Saturating so that an overlong candidate cannot
            // wrap around and win against a real path.
            let candidate = vertex_dist.saturating_add(weight);

            if candidate < dist[neighbor] {
                dist[neighbor] = candidate;
                pred[neighbor] = Some(vertex);
            }
        }
    }

    Paths { dist, pred }
}
