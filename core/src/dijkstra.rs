//! Single-source shortest paths with Dijkstra's algorithm.
//!
//! The node with the smallest tentative distance is found with a linear scan
//! over the not yet finalized nodes instead of a priority queue. The graphs
//! this is used for are small (tens to hundreds of nodes), and the scan makes
//! the selection on equal distances easy to reason about: the node with the
//! lexicographically smallest name wins.

use crate::graph::Graph;
use crate::types::{NodeName, Weight};
use std::collections::BTreeMap;
use std::ops::Index;

/// Best known route from the source to a single node.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Route<W> {
    /// Total weight of the route, `None` if the node can't be reached from
    /// the source.
    pub distance: Option<W>,
    /// All nodes on the route starting with the source, without the node the
    /// route leads to. Empty for the source itself and for unreachable nodes.
    pub via: Vec<NodeName>,
}

impl<W: Weight> Route<W> {
    pub fn unreachable() -> Route<W> {
        Route {
            distance: None,
            via: Vec::default(),
        }
    }

    pub fn is_reachable(&self) -> bool {
        self.distance.is_some()
    }

    /// The complete list of stops when travelling to `destination`, including
    /// the source and the destination itself.
    pub fn stops(&self, destination: &str) -> Vec<NodeName> {
        let mut stops = self.via.clone();
        stops.push(destination.into());
        stops
    }
}

/// Routes from one source node to all nodes of a graph.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ShortestPaths<W> {
    source: NodeName,
    routes: BTreeMap<NodeName, Route<W>>,
}

impl<W: Weight> ShortestPaths<W> {
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn get(&self, node: &str) -> Option<&Route<W>> {
        self.routes.get(node)
    }

    /// Distance to the node, `None` if the node is unknown or unreachable.
    pub fn distance(&self, node: &str) -> Option<W> {
        self.routes.get(node).and_then(|r| r.distance)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&NodeName, &Route<W>)> + '_ {
        self.routes.iter()
    }

    /// All nodes that can be reached from the source (including the source).
    pub fn reachable(&self) -> impl Iterator<Item = (&NodeName, &Route<W>)> + '_ {
        self.routes.iter().filter(|(_, r)| r.is_reachable())
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn into_routes(self) -> BTreeMap<NodeName, Route<W>> {
        self.routes
    }
}

impl<W: Weight> Index<&str> for ShortestPaths<W> {
    type Output = Route<W>;

    /// # Panics
    ///
    /// Panics if the node is not part of the graph.
    fn index(&self, node: &str) -> &Route<W> {
        &self.routes[node]
    }
}

/// Find the frontier node with the smallest tentative distance.
///
/// Only a strictly smaller distance replaces the current candidate, so on
/// equal distances the first node in name order is selected. Nodes that have
/// not been reached yet are never selected.
fn select_min<'a, W: Weight>(frontier: &BTreeMap<&'a str, Option<W>>) -> Option<(&'a str, W)> {
    let mut result: Option<(&'a str, W)> = None;
    for (node, distance) in frontier.iter() {
        if let Some(distance) = *distance {
            let replace = match result {
                Some((_, best)) => distance < best,
                None => true,
            };
            if replace {
                result = Some((*node, distance));
            }
        }
    }
    result
}

/// Compute the shortest routes from `start` to every node of the graph.
///
/// The graph is expected to have passed [`crate::graph::validation::check`];
/// negative weights in particular lead to wrong results. The result contains
/// an entry for every node: nodes that can't be reached have no distance and
/// an empty route. Paths whose total weight can't be represented by `W` are
/// ignored.
///
/// `start` must be a node of the graph. If it is not, every node of the graph
/// is reported as unreachable and only `start` itself gets an empty route
/// with distance zero.
pub fn compute_from_source<W: Weight>(graph: &Graph<W>, start: &str) -> ShortestPaths<W> {
    debug!(
        "computing shortest paths from {} in graph with {} nodes",
        start,
        graph.len()
    );

    let mut frontier: BTreeMap<&str, Option<W>> = graph
        .nodes()
        .map(|n| (n.as_str(), None))
        .collect();
    let mut routes: BTreeMap<NodeName, Route<W>> = graph
        .nodes()
        .map(|n| (n.clone(), Route::unreachable()))
        .collect();

    if let Some(d) = frontier.get_mut(start) {
        *d = Some(W::zero());
    } else {
        warn!("start node {} is not part of the graph", start);
    }
    routes.insert(
        start.into(),
        Route {
            distance: Some(W::zero()),
            via: Vec::default(),
        },
    );

    while let Some((selected, distance)) = select_min(&frontier) {
        trace!("finalizing {} with distance {}", selected, distance);

        let mut via = routes
            .get(selected)
            .map(|r| r.via.clone())
            .unwrap_or_default();
        via.push(selected.into());

        for (neighbor, weight) in graph.neighbors(selected) {
            if let Some(current) = frontier.get_mut(neighbor.as_str()) {
                let candidate = match distance.checked_sum(weight) {
                    Some(candidate) => candidate,
                    None => {
                        debug!(
                            "distance from {} to {} via {} exceeds the weight type",
                            start, neighbor, selected
                        );
                        continue;
                    }
                };
                if current.map_or(true, |c| candidate < c) {
                    trace!(
                        "relaxing {} from {:?} to {} via {}",
                        neighbor,
                        current,
                        candidate,
                        selected
                    );
                    *current = Some(candidate);
                    routes.insert(
                        neighbor.clone(),
                        Route {
                            distance: Some(candidate),
                            via: via.clone(),
                        },
                    );
                }
            }
        }

        frontier.remove(selected);
    }
    if !frontier.is_empty() {
        trace!("{} nodes are not reachable from {}", frontier.len(), start);
    }

    ShortestPaths {
        source: start.into(),
        routes,
    }
}
