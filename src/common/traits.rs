//! Collaborator trait between the search engine and the map graph

use crate::common::error::{RoutingError, RoutingResult};
use crate::common::types::{NodeId, Point2D};

/// Interface the search engine consumes from the surrounding map system.
///
/// The graph owns all node storage; the planner holds only `NodeId`s and
/// keeps its per-search bookkeeping (cost-so-far, heuristic, parent) in a
/// side table of its own, so a single graph instance can serve repeated
/// searches without being mutated.
pub trait RouteGraph {
    /// Return the node nearest to a coordinate in normalized (0-1) space.
    ///
    /// Fails with [`RoutingError::NodeNotFound`] when the graph is empty.
    fn closest_node(&self, p: Point2D) -> RoutingResult<NodeId>;

    /// Nodes adjacent to `id` per the underlying topology.
    ///
    /// The planner calls this at most once per node per search; providers
    /// that compute adjacency lazily must make repeated calls idempotent.
    fn neighbors(&self, id: NodeId) -> Vec<NodeId>;

    /// Coordinate of a node in normalized space.
    fn position(&self, id: NodeId) -> Point2D;

    /// Symmetric Euclidean distance between two nodes in normalized units.
    fn distance(&self, a: NodeId, b: NodeId) -> f64 {
        self.position(a).distance(&self.position(b))
    }

    /// Multiplier converting normalized distance units to real-world
    /// units (e.g., meters).
    fn metric_scale(&self) -> f64 {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Two fixed nodes, no edges
    struct TwoNodeGraph;

    impl RouteGraph for TwoNodeGraph {
        fn closest_node(&self, p: Point2D) -> RoutingResult<NodeId> {
            if p.x < 0.5 { Ok(0) } else { Ok(1) }
        }

        fn neighbors(&self, _id: NodeId) -> Vec<NodeId> {
            Vec::new()
        }

        fn position(&self, id: NodeId) -> Point2D {
            if id == 0 { Point2D::origin() } else { Point2D::new(3.0, 4.0) }
        }
    }

    #[test]
    fn test_default_distance_uses_positions() {
        let g = TwoNodeGraph;
        assert!((g.distance(0, 1) - 5.0).abs() < 1e-10);
        assert!((g.distance(1, 0) - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_default_metric_scale() {
        let g = TwoNodeGraph;
        assert_eq!(g.metric_scale(), 1.0);
    }
}
