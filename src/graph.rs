use rustc_hash::FxHashMap;

use crate::{
    algo::shortest_paths::{self, ShortestPath},
    error::{AddEdgeError, AddEdgeErrorKind},
    matrix::SquareMatrix,
};

/// Undirected weighted graph over named vertices, backed by a dense
/// symmetric adjacency matrix.
///
/// Vertices are identified by name and indexed by insertion order. Edge
/// weights are positive integers; a zero cell in the matrix means "no
/// edge". Vertices cannot be removed.
///
/// # Examples
///
/// ```
/// use wayline::RouteGraph;
///
/// let mut graph = RouteGraph::new();
///
/// graph.add_vertex("Prague");
/// graph.add_vertex("Vienna");
/// graph.add_vertex("Munich");
///
/// graph.add_edge("Prague", "Vienna", 293)?;
/// graph.add_edge("Vienna", "Munich", 402)?;
///
/// let route = graph.shortest_path("Prague", "Munich")?;
/// assert_eq!(route.distance(), 695);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct RouteGraph {
    vertices: Vec<String>,
    matrix: SquareMatrix,
    // First insertion wins so that lookup resolves a duplicate name to the
    // smallest index, exactly as a linear scan over the vertex list would.
    name_index: FxHashMap<String, usize>,
}

impl RouteGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Appends a vertex with the given name and grows the matrix by one row
    /// and one column, keeping all existing weights. Returns the index of
    /// the new vertex.
    ///
    /// Names are not checked for uniqueness. A duplicate name creates a new
    /// vertex that is unreachable by name lookup.
    pub fn add_vertex(&mut self, name: impl Into<String>) -> usize {
        let name = name.into();
        let index = self.vertices.len();

        self.name_index.entry(name.clone()).or_insert(index);
        self.vertices.push(name);
        self.matrix.grow(self.vertices.len());

        index
    }

    /// Returns the index of the first vertex with the given name.
    pub fn vertex_index(&self, name: &str) -> Option<usize> {
        self.name_index.get(name).copied()
    }

    /// Returns the name of the vertex at the given index.
    pub fn vertex_name(&self, index: usize) -> Option<&str> {
        self.vertices.get(index).map(String::as_str)
    }

    /// Connects two vertices with an undirected edge, overwriting any
    /// previous weight between the same pair.
    ///
    /// If either endpoint does not resolve, the graph is left unchanged.
    /// Passing a zero weight is indistinguishable from the edge being
    /// absent.
    pub fn add_edge(&mut self, from: &str, to: &str, weight: u64) -> Result<(), AddEdgeError> {
        let from = self
            .vertex_index(from)
            .ok_or_else(|| AddEdgeError::new(AddEdgeErrorKind::SourceAbsent))?;
        let to = self
            .vertex_index(to)
            .ok_or_else(|| AddEdgeError::new(AddEdgeErrorKind::DestinationAbsent))?;

        self.matrix.set(from, to, weight);
        self.matrix.set(to, from, weight);

        Ok(())
    }

    /// Finds the shortest path between two named vertices.
    ///
    /// See [`shortest_paths`](crate::algo::shortest_paths) for details on
    /// the algorithm and its error conditions.
    pub fn shortest_path(
        &self,
        from: &str,
        to: &str,
    ) -> Result<ShortestPath, shortest_paths::Error> {
        shortest_paths::shortest_path(self, from, to)
    }

    /// Read-only projection of the adjacency matrix for display. Rendering
    /// is left entirely to the caller.
    pub fn snapshot(&self) -> MatrixSnapshot {
        MatrixSnapshot {
            vertex_names: self.vertices.clone(),
            rows: (0..self.vertices.len())
                .map(|row| self.matrix.row(row).to_vec())
                .collect(),
        }
    }

    pub(crate) fn matrix(&self) -> &SquareMatrix {
        &self.matrix
    }
}

/// Snapshot of the adjacency matrix with the vertex names in index order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatrixSnapshot {
    pub vertex_names: Vec<String>,
    pub rows: Vec<Vec<u64>>,
}
