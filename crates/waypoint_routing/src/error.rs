use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("Unknown node {0}")]
    UnknownNode(String),
    #[error("Could not compute a distance between {from} and {to}")]
    MalformedEdge { from: String, to: String },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RoutingError {
    #[error("Unknown location {0}")]
    UnknownNode(String),
    #[error("Search stopped after {0} iterations")]
    IterationLimitExceeded(usize),
}
