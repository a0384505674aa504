use thiserror::Error;

use crate::types::NodeName;

/// First integrity violation found in a graph.
///
/// Validation stops at the first problem, so fixing the reported edge and
/// validating again may reveal further violations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError<W> {
    #[error("edge {node} -> {neighbor} has no reciprocal edge {neighbor} -> {node}")]
    MissingReciprocalEdge { node: NodeName, neighbor: NodeName },
    #[error("edge {node} -> {neighbor} has negative weight {weight}")]
    NegativeWeight {
        node: NodeName,
        neighbor: NodeName,
        weight: W,
    },
    #[error("edge {node} -> {neighbor} has weight {weight_a}, but the reverse edge has weight {weight_b}")]
    AsymmetricWeight {
        node: NodeName,
        neighbor: NodeName,
        weight_a: W,
        weight_b: W,
    },
}

impl<W> ValidationError<W> {
    /// The node whose adjacency contained the offending edge.
    pub fn node(&self) -> &str {
        match self {
            ValidationError::MissingReciprocalEdge { node, .. }
            | ValidationError::NegativeWeight { node, .. }
            | ValidationError::AsymmetricWeight { node, .. } => node.as_str(),
        }
    }

    /// The neighbor at the other end of the offending edge.
    pub fn neighbor(&self) -> &str {
        match self {
            ValidationError::MissingReciprocalEdge { neighbor, .. }
            | ValidationError::NegativeWeight { neighbor, .. }
            | ValidationError::AsymmetricWeight { neighbor, .. } => neighbor.as_str(),
        }
    }
}

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum TransitRouteError {
    #[error("invalid graph: {0}")]
    InvalidGraph(Box<dyn std::error::Error + Send + Sync>),
    #[error("station '{0}' does not exist")]
    UnknownNode(String),
    #[error("there is no route from '{start}' to '{end}'")]
    Unreachable { start: String, end: String },
    #[error("could not read graph from file {path}: {source}")]
    LoadingGraph {
        path: String,
        source: std::io::Error,
    },
    #[error(transparent)]
    GraphFormat(#[from] toml::de::Error),
}

impl<W> From<ValidationError<W>> for TransitRouteError
where
    W: std::fmt::Debug + std::fmt::Display + Send + Sync + 'static,
{
    fn from(e: ValidationError<W>) -> Self {
        TransitRouteError::InvalidGraph(Box::new(e))
    }
}

pub type Result<T> = std::result::Result<T, TransitRouteError>;
