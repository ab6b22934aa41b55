pub mod dense;
pub mod hash;
pub mod trait_def;

mod indexing;
#[cfg(test)]
mod tests;

pub use dense::DenseAdjacencyMatrix;
pub use hash::HashAdjacencyMatrix;
pub use trait_def::AdjacencyMatrix;
