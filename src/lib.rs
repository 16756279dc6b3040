pub mod algo;
pub mod error;
pub mod graph;
pub mod matrix;

pub use algo::shortest_paths::ShortestPath;
pub use error::{AddEdgeError, AddEdgeErrorKind};
pub use graph::{MatrixSnapshot, RouteGraph};
