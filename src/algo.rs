pub mod shortest_paths;

pub use shortest_paths::{shortest_path, ShortestPath};
