//! In-memory road graph implementing [`RouteGraph`]
//!
//! Nodes live in an arena indexed by [`NodeId`]; adjacency is stored as
//! per-node neighbor lists. Nearest-node lookup is a linear scan, which
//! is adequate for the synthetic and test graphs this adapter targets.

use itertools::Itertools;
use ordered_float::OrderedFloat;

use crate::common::{NodeId, Point2D, RouteGraph, RoutingError, RoutingResult};

/// Builder-style in-memory graph with undirected edges
#[derive(Debug, Clone)]
pub struct MemoryGraph {
    nodes: Vec<Point2D>,
    adjacency: Vec<Vec<NodeId>>,
    metric_scale: f64,
}

impl MemoryGraph {
    pub fn new() -> Self {
        Self::with_metric_scale(1.0)
    }

    /// Graph whose normalized distances convert to real-world units by
    /// the given multiplier
    pub fn with_metric_scale(metric_scale: f64) -> Self {
        MemoryGraph {
            nodes: Vec::new(),
            adjacency: Vec::new(),
            metric_scale,
        }
    }

    /// Add a node and return its id
    pub fn add_node(&mut self, position: Point2D) -> NodeId {
        self.nodes.push(position);
        self.adjacency.push(Vec::new());
        self.nodes.len() - 1
    }

    /// Connect two existing nodes with an undirected edge
    pub fn add_edge(&mut self, a: NodeId, b: NodeId) {
        assert!(a < self.nodes.len() && b < self.nodes.len(), "edge references unknown node");
        if a == b {
            return;
        }
        if !self.adjacency[a].contains(&b) {
            self.adjacency[a].push(b);
        }
        if !self.adjacency[b].contains(&a) {
            self.adjacency[b].push(a);
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl Default for MemoryGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl RouteGraph for MemoryGraph {
    fn closest_node(&self, p: Point2D) -> RoutingResult<NodeId> {
        self.nodes
            .iter()
            .position_min_by_key(|node| OrderedFloat(node.distance(&p)))
            .ok_or_else(|| RoutingError::NodeNotFound("graph has no nodes".to_string()))
    }

    fn neighbors(&self, id: NodeId) -> Vec<NodeId> {
        self.adjacency[id].clone()
    }

    fn position(&self, id: NodeId) -> Point2D {
        self.nodes[id]
    }

    fn metric_scale(&self) -> f64 {
        self.metric_scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closest_node_picks_nearest() {
        let mut graph = MemoryGraph::new();
        graph.add_node(Point2D::new(0.0, 0.0));
        graph.add_node(Point2D::new(0.5, 0.5));
        graph.add_node(Point2D::new(1.0, 1.0));

        assert_eq!(graph.closest_node(Point2D::new(0.1, 0.1)).unwrap(), 0);
        assert_eq!(graph.closest_node(Point2D::new(0.6, 0.4)).unwrap(), 1);
        assert_eq!(graph.closest_node(Point2D::new(0.9, 1.0)).unwrap(), 2);
    }

    #[test]
    fn test_closest_node_on_empty_graph_fails() {
        let graph = MemoryGraph::new();
        let result = graph.closest_node(Point2D::origin());
        assert!(matches!(result, Err(RoutingError::NodeNotFound(_))));
    }

    #[test]
    fn test_edges_are_undirected_and_deduplicated() {
        let mut graph = MemoryGraph::new();
        let a = graph.add_node(Point2D::new(0.0, 0.0));
        let b = graph.add_node(Point2D::new(1.0, 0.0));
        graph.add_edge(a, b);
        graph.add_edge(b, a);
        graph.add_edge(a, a);

        assert_eq!(graph.neighbors(a), vec![b]);
        assert_eq!(graph.neighbors(b), vec![a]);
    }

    #[test]
    fn test_distance_is_symmetric_euclidean() {
        let mut graph = MemoryGraph::new();
        let a = graph.add_node(Point2D::new(0.0, 0.0));
        let b = graph.add_node(Point2D::new(3.0, 4.0));

        assert!((graph.distance(a, b) - 5.0).abs() < 1e-10);
        assert!((graph.distance(b, a) - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_metric_scale_is_reported() {
        let graph = MemoryGraph::with_metric_scale(2.5);
        assert_eq!(graph.metric_scale(), 2.5);
    }
}
