//! Route queries on a validated graph.

use crate::{
    dijkstra::ShortestPaths,
    errors::{Result, TransitRouteError},
    graph::Graph,
    types::{NodeName, Weight},
};
use std::fmt;

/// The fastest way to get from one station to another.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Journey<W> {
    pub start: NodeName,
    pub end: NodeName,
    pub distance: W,
    /// All stations of the journey, including start and end.
    pub stops: Vec<NodeName>,
}

impl<W> fmt::Display for Journey<W> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.stops.join("->"))
    }
}

/// Answers route queries for a graph that passed validation.
///
/// A planner can only be created for a valid graph, so an inconsistent graph
/// never produces any routes.
#[derive(Clone, Debug)]
pub struct RoutePlanner<W> {
    graph: Graph<W>,
}

impl<W> RoutePlanner<W>
where
    W: Weight + 'static,
{
    pub fn new(graph: Graph<W>) -> Result<RoutePlanner<W>> {
        if let Err(e) = graph.check() {
            error!("graph validation failed: {}", e);
            return Err(e.into());
        }
        Ok(RoutePlanner { graph })
    }

    pub fn graph(&self) -> &Graph<W> {
        &self.graph
    }

    /// Names of all stations in lexicographic order.
    pub fn stations(&self) -> Vec<NodeName> {
        self.graph.nodes().cloned().collect()
    }

    pub fn contains(&self, station: &str) -> bool {
        self.graph.contains_node(station)
    }

    fn ensure_station(&self, station: &str) -> Result<()> {
        if self.contains(station) {
            Ok(())
        } else {
            Err(TransitRouteError::UnknownNode(station.to_string()))
        }
    }

    /// Routes from `start` to all stations.
    pub fn routes_from(&self, start: &str) -> Result<ShortestPaths<W>> {
        self.ensure_station(start)?;
        Ok(self.graph.shortest_paths_from(start))
    }

    /// Find the fastest journey from `start` to `end`.
    pub fn route(&self, start: &str, end: &str) -> Result<Journey<W>> {
        self.ensure_station(start)?;
        self.ensure_station(end)?;

        let paths = self.graph.shortest_paths_from(start);
        match paths.get(end).and_then(|r| r.distance.map(|d| (r, d))) {
            Some((route, distance)) => Ok(Journey {
                start: start.into(),
                end: end.into(),
                distance,
                stops: route.stops(end),
            }),
            None => Err(TransitRouteError::Unreachable {
                start: start.to_string(),
                end: end.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests;
