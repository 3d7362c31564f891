use thiserror::Error;

/// Errors returned for contract violations at the core's public boundary.
///
/// Algorithmic degeneracies (unreachable vertices, an empty dual triangle
/// set, multiple connected components) are never represented here: they are
/// structured output data. This enum only covers arguments a caller got
/// wrong.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("sample count must be greater than zero, got {0}")]
    InvalidSampleCount(i64),

    #[error("vertex index {index} is out of range for {vertex_count} vertices")]
    VertexIndexOutOfRange { index: i64, vertex_count: usize },

    #[error("triangle {0:?} repeats a vertex index")]
    DegenerateTriangle([usize; 3]),

    #[error("edge ({0}, {0}) is a self-loop")]
    SelfLoopEdge(usize),

    #[error("graph must have at least one vertex")]
    EmptyGraph,
}
