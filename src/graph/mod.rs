pub mod traits;
pub mod weighted;
pub mod generators;

pub use traits::{Graph, Weight};
pub use weighted::{Edge, WeightedGraph};
