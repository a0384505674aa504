//! Undirected weighted graph with named nodes.
//!
//! The graph is stored as a mapping from each node to its adjacency mapping
//! (neighbor name to edge weight). Every undirected edge is represented by
//! two directed entries with the same weight. Whether a given graph actually
//! fulfills this can be tested with [`Graph::check`].

pub mod validation;

use crate::{
    dijkstra::{self, ShortestPaths},
    errors::{Result, TransitRouteError, ValidationError},
    types::{Edge, NodeName, Weight},
};
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;
use std::path::Path;

/// Adjacency mapping of a single node.
pub type Adjacency<W> = BTreeMap<NodeName, W>;

/// An immutable, undirected graph with named nodes and weighted edges.
///
/// Nodes and neighbors are always iterated in the lexicographic order of
/// their names, which makes validation and path selection deterministic.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(transparent)]
pub struct Graph<W> {
    adjacency: BTreeMap<NodeName, Adjacency<W>>,
}

impl<W> Default for Graph<W> {
    fn default() -> Self {
        Graph {
            adjacency: BTreeMap::default(),
        }
    }
}

impl<W: Weight> Graph<W> {
    /// Create a graph without any nodes.
    pub fn new() -> Graph<W> {
        Graph::default()
    }

    /// Create a graph from the given adjacency mappings as they are.
    ///
    /// No reverse entries are added, so the result might not be a valid
    /// undirected graph. Use [`Graph::check`] before querying it.
    pub fn from_adjacency<I, N, A, M>(adjacency: I) -> Graph<W>
    where
        I: IntoIterator<Item = (N, A)>,
        N: Into<NodeName>,
        A: IntoIterator<Item = (M, W)>,
        M: Into<NodeName>,
    {
        let adjacency = adjacency
            .into_iter()
            .map(|(node, neighbors)| {
                let neighbors = neighbors
                    .into_iter()
                    .map(|(neighbor, weight)| (neighbor.into(), weight))
                    .collect();
                (node.into(), neighbors)
            })
            .collect();
        Graph { adjacency }
    }

    /// Create a graph from a list of undirected edges.
    ///
    /// Each edge is inserted in both directions. If the same pair of nodes is
    /// given more than once, the last weight wins.
    pub fn from_edges<I, E>(edges: I) -> Graph<W>
    where
        I: IntoIterator<Item = E>,
        E: Into<Edge<W>>,
    {
        let mut graph = Graph::new();
        for e in edges {
            let e: Edge<W> = e.into();
            let inverse = e.inverse();
            graph.insert_directed(e);
            graph.insert_directed(inverse);
        }
        graph
    }

    fn insert_directed(&mut self, e: Edge<W>) {
        self.adjacency
            .entry(e.source)
            .or_default()
            .insert(e.target, e.weight);
    }

    /// Parse a graph from its TOML representation.
    ///
    /// Each node is a table and each entry of the table is a neighbor with the
    /// edge weight as value:
    ///
    /// ```toml
    /// ["Baker Street"]
    /// "Bond Street" = 2
    ///
    /// ["Bond Street"]
    /// "Baker Street" = 2
    /// ```
    pub fn from_toml_str(content: &str) -> Result<Graph<W>>
    where
        W: DeserializeOwned,
    {
        let graph: Graph<W> = toml::from_str(content)?;
        Ok(graph)
    }

    /// Load a graph from a TOML file (see [`Graph::from_toml_str`]).
    pub fn load_from(location: &Path) -> Result<Graph<W>>
    where
        W: DeserializeOwned,
    {
        let content =
            std::fs::read_to_string(location).map_err(|e| TransitRouteError::LoadingGraph {
                path: location.to_string_lossy().to_string(),
                source: e,
            })?;
        let graph = Graph::from_toml_str(&content)?;
        info!(
            "Loaded graph with {} nodes and {} edges from {}",
            graph.len(),
            graph.edge_count(),
            location.to_string_lossy()
        );
        Ok(graph)
    }

    /// Names of all nodes in lexicographic order.
    pub fn nodes(&self) -> impl Iterator<Item = &NodeName> + '_ {
        self.adjacency.keys()
    }

    /// All neighbors of the given node with the weight of the connecting edge.
    ///
    /// Unknown nodes have no neighbors.
    pub fn neighbors<'a>(&'a self, node: &str) -> impl Iterator<Item = (&'a NodeName, W)> + 'a {
        self.adjacency
            .get(node)
            .into_iter()
            .flat_map(|neighbors| neighbors.iter().map(|(n, w)| (n, *w)))
    }

    pub fn adjacency(&self, node: &str) -> Option<&Adjacency<W>> {
        self.adjacency.get(node)
    }

    /// Weight of the directed entry from `source` to `target`, if it exists.
    pub fn weight(&self, source: &str, target: &str) -> Option<W> {
        self.adjacency.get(source)?.get(target).copied()
    }

    pub fn contains_node(&self, node: &str) -> bool {
        self.adjacency.contains_key(node)
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Number of undirected edges.
    ///
    /// Each pair of directed entries counts once. For graphs that do not pass
    /// [`Graph::check`], entries without their reverse are counted as well.
    pub fn edge_count(&self) -> usize {
        self.adjacency
            .iter()
            .map(|(node, neighbors)| {
                neighbors
                    .keys()
                    .filter(|neighbor| *neighbor <= node || self.weight(neighbor, node).is_none())
                    .count()
            })
            .sum()
    }

    /// Check the integrity of the graph, see [`validation::check`].
    pub fn check(&self) -> std::result::Result<(), ValidationError<W>> {
        validation::check(self)
    }

    /// Shortest paths from `start` to every node, see
    /// [`dijkstra::compute_from_source`].
    pub fn shortest_paths_from(&self, start: &str) -> ShortestPaths<W> {
        dijkstra::compute_from_source(self, start)
    }
}
