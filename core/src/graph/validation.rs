use super::Graph;
use crate::{errors::ValidationError, types::Weight};

/// Check that the graph is a consistent, undirected graph.
///
/// For each node and each of its neighbors (both in name order) the
/// following is checked, in this order:
///
/// 1. the neighbor exists and lists the node as its own neighbor,
/// 2. the weight is not negative,
/// 3. the weight of the reverse edge is the same.
///
/// The first violation is returned and no further edges are inspected.
/// Connectivity is not part of the check.
pub fn check<W: Weight>(graph: &Graph<W>) -> Result<(), ValidationError<W>> {
    for node in graph.nodes() {
        for (neighbor, weight) in graph.adjacency(node).into_iter().flatten() {
            let weight = *weight;
            trace!("checking edge {} -> {} ({})", node, neighbor, weight);

            let reverse_weight = match graph.weight(neighbor, node) {
                Some(w) => w,
                None => {
                    debug!("edge {} -> {} has no reverse edge", node, neighbor);
                    return Err(ValidationError::MissingReciprocalEdge {
                        node: node.clone(),
                        neighbor: neighbor.clone(),
                    });
                }
            };

            if weight < W::zero() {
                return Err(ValidationError::NegativeWeight {
                    node: node.clone(),
                    neighbor: neighbor.clone(),
                    weight,
                });
            }

            // NaN weights are never equal to their reverse weight
            if reverse_weight != weight {
                return Err(ValidationError::AsymmetricWeight {
                    node: node.clone(),
                    neighbor: neighbor.clone(),
                    weight_a: weight,
                    weight_b: reverse_weight,
                });
            }
        }
    }
    debug!("graph with {} nodes is valid", graph.len());
    Ok(())
}
