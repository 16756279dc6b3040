//! Find the shortest path between two named vertices and its distance.
//!
//! The algorithm is Dijkstra's, run over the dense adjacency matrix with a
//! linear minimum scan per round. Edge weights must be positive; a zero
//! cell in the matrix is the absence of an edge, so a zero-weight edge
//! cannot take part in any path.
//!
//! # Examples
//!
//! ```
//! use wayline::RouteGraph;
//!
//! let mut graph = RouteGraph::new();
//!
//! for name in ["Prague", "Bratislava", "Vienna", "Munich", "Nuremberg"] {
//!     graph.add_vertex(name);
//! }
//!
//! graph.add_edge("Prague", "Bratislava", 328)?;
//! graph.add_edge("Prague", "Nuremberg", 297)?;
//! graph.add_edge("Prague", "Vienna", 293)?;
//! graph.add_edge("Bratislava", "Vienna", 79)?;
//! graph.add_edge("Nuremberg", "Munich", 170)?;
//! graph.add_edge("Vienna", "Munich", 402)?;
//!
//! let route = graph.shortest_path("Bratislava", "Munich")?;
//!
//! assert_eq!(route.distance(), 481);
//! assert_eq!(route.path(), ["Bratislava", "Vienna", "Munich"]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use thiserror::Error;

use crate::graph::RouteGraph;

mod dijkstra;

use dijkstra::{dijkstra, INF};

/// A shortest path between two named vertices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPath {
    path: Vec<String>,
    distance: u64,
}

impl ShortestPath {
    /// Vertex names from the source to the destination, inclusive. A query
    /// from a vertex to itself yields just that vertex.
    pub fn path(&self) -> &[String] {
        &self.path
    }

    /// Total weight of the edges along the path.
    pub fn distance(&self) -> u64 {
        self.distance
    }
}

/// The error encountered during a shortest path query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// An endpoint name does not resolve to any vertex.
    #[error("node not found")]
    NodeNotFound,

    /// Both endpoints exist, but no sequence of edges connects them.
    #[error("path not found")]
    PathNotFound,
}

/// Finds the shortest path between two named vertices of the graph.
///
/// The whole search runs from scratch on every call; nothing is cached
/// across queries or graph mutations.
pub fn shortest_path(graph: &RouteGraph, from: &str, to: &str) -> Result<ShortestPath, Error> {
    let source = graph.vertex_index(from).ok_or(Error::NodeNotFound)?;
    let target = graph.vertex_index(to).ok_or(Error::NodeNotFound)?;

    let paths = dijkstra(graph.matrix(), source);

    if paths.dist[target] == INF {
        return Err(Error::PathNotFound);
    }

    // Walk the predecessor chain back to the source. The chain always
    // terminates there, because only relaxed vertices get a predecessor.
    let mut path = Vec::new();
    let mut curr = Some(target);

    while let Some(index) = curr {
        path.push(index);
        curr = paths.pred[index];
    }

    path.reverse();

    Ok(ShortestPath {
        path: path
            .into_iter()
            .filter_map(|index| graph.vertex_name(index))
            .map(ToOwned::to_owned)
            .collect(),
        distance: paths.dist[target],
    })
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use proptest::prelude::*;

    use super::*;

    fn create_route_network() -> RouteGraph {
        let mut graph = RouteGraph::new();

        for name in ["L", "B", "A", "N", "G", "S", "R", "D", "M"] {
            graph.add_vertex(name);
        }

        let edges = [
            ("L", "B", 7),
            ("B", "A", 27),
            ("L", "N", 10),
            ("B", "G", 9),
            ("G", "S", 11),
            ("A", "M", 15),
            ("N", "G", 8),
            ("N", "R", 31),
            ("R", "D", 32),
            ("S", "D", 17),
            ("S", "M", 15),
            ("D", "M", 21),
        ];

        for (from, to, weight) in edges {
            graph.add_edge(from, to, weight).unwrap();
        }

        graph
    }

    #[test]
    fn route_network_shortest_path() {
        let graph = create_route_network();
        let route = graph.shortest_path("L", "M").unwrap();

        // 7 (L-B) + 9 (B-G) + 11 (G-S) + 15 (S-M)
        assert_eq!(route.distance(), 42);
        assert_eq!(route.path(), ["L", "B", "G", "S", "M"]);
    }

    #[test]
    fn query_is_symmetric_in_distance() {
        let graph = create_route_network();

        let there = graph.shortest_path("L", "M").unwrap();
        let back = graph.shortest_path("M", "L").unwrap();

        assert_eq!(there.distance(), back.distance());
    }

    #[test]
    fn self_query() {
        let graph = create_route_network();
        let route = graph.shortest_path("L", "L").unwrap();

        assert_eq!(route.distance(), 0);
        assert_eq!(route.path(), ["L"]);
    }

    #[test]
    fn unknown_vertex() {
        let graph = create_route_network();

        assert_matches!(graph.shortest_path("Z", "L"), Err(Error::NodeNotFound));
        assert_matches!(graph.shortest_path("L", "Z"), Err(Error::NodeNotFound));
    }

    #[test]
    fn disconnected_components() {
        let mut graph = RouteGraph::new();

        for name in ["a", "b", "c", "d"] {
            graph.add_vertex(name);
        }

        graph.add_edge("a", "b", 1).unwrap();
        graph.add_edge("c", "d", 1).unwrap();

        assert_matches!(graph.shortest_path("a", "d"), Err(Error::PathNotFound));
        assert_eq!(graph.shortest_path("a", "b").unwrap().distance(), 1);
    }

    #[test]
    fn isolated_vertices() {
        let mut graph = RouteGraph::new();
        graph.add_vertex("a");
        graph.add_vertex("b");

        assert_matches!(graph.shortest_path("a", "b"), Err(Error::PathNotFound));
    }

    #[test]
    fn equal_cost_tie_breaks_by_index() {
        let mut graph = RouteGraph::new();

        for name in ["a", "b", "c", "d"] {
            graph.add_vertex(name);
        }

        graph.add_edge("a", "b", 1).unwrap();
        graph.add_edge("a", "c", 1).unwrap();
        graph.add_edge("b", "d", 1).unwrap();
        graph.add_edge("c", "d", 1).unwrap();

        // Both a-b-d and a-c-d cost 2. The vertex with the lower index is
        // settled first and the later equal candidate does not displace it.
        let route = graph.shortest_path("a", "d").unwrap();

        assert_eq!(route.distance(), 2);
        assert_eq!(route.path(), ["a", "b", "d"]);
    }

    #[test]
    fn zero_weight_edge_is_absent() {
        let mut graph = RouteGraph::new();
        graph.add_vertex("a");
        graph.add_vertex("b");

        graph.add_edge("a", "b", 0).unwrap();

        assert_matches!(graph.shortest_path("a", "b"), Err(Error::PathNotFound));
    }

    #[test]
    fn longer_detour_beats_heavy_direct_edge() {
        let mut graph = RouteGraph::new();

        for name in ["a", "b", "c"] {
            graph.add_vertex(name);
        }

        graph.add_edge("a", "c", 10).unwrap();
        graph.add_edge("a", "b", 2).unwrap();
        graph.add_edge("b", "c", 3).unwrap();

        let route = graph.shortest_path("a", "c").unwrap();

        assert_eq!(route.distance(), 5);
        assert_eq!(route.path(), ["a", "b", "c"]);
    }

    fn reachable(graph: &RouteGraph, from: usize, to: usize) -> bool {
        let snapshot = graph.snapshot();
        let mut stack = vec![from];
        let mut seen = vec![false; graph.vertex_count()];
        seen[from] = true;

        while let Some(vertex) = stack.pop() {
            if vertex == to {
                return true;
            }

            for (next, &weight) in snapshot.rows[vertex].iter().enumerate() {
                if weight != 0 && !seen[next] {
                    seen[next] = true;
                    stack.push(next);
                }
            }
        }

        false
    }

    proptest! {
        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_path_is_consistent(
            n in 1..12usize,
            edges in prop::collection::vec((0..12usize, 0..12usize, 1..50u64), 0..40),
            from in 0..12usize,
            to in 0..12usize,
        ) {
            let mut graph = RouteGraph::new();

            for i in 0..n {
                graph.add_vertex(format!("v{i}"));
            }

            for (i, j, weight) in edges {
                let (i, j) = (i % n, j % n);
                graph
                    .add_edge(&format!("v{i}"), &format!("v{j}"), weight)
                    .unwrap();
            }

            let (from, to) = (from % n, to % n);
            let snapshot = graph.snapshot();

            match graph.shortest_path(&format!("v{from}"), &format!("v{to}")) {
                Ok(route) => {
                    let from_name = format!("v{from}");
                    let to_name = format!("v{to}");
                    prop_assert_eq!(route.path().first().map(String::as_str), Some(from_name.as_str()));
                    prop_assert_eq!(route.path().last().map(String::as_str), Some(to_name.as_str()));

                    let indices = route
                        .path()
                        .iter()
                        .map(|name| graph.vertex_index(name).unwrap())
                        .collect::<Vec<_>>();

                    let mut total = 0;
                    for pair in indices.windows(2) {
                        let weight = snapshot.rows[pair[0]][pair[1]];
                        prop_assert_ne!(weight, 0);
                        total += weight;
                    }

                    prop_assert_eq!(total, route.distance());
                }
                Err(Error::PathNotFound) => {
                    prop_assert!(!reachable(&graph, from, to));
                }
                Err(Error::NodeNotFound) => {
                    prop_assert!(false, "both endpoints were added");
                }
            }
        }
    }
}
