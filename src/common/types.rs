//! Common types used throughout route_planner

use nalgebra::Vector2;

/// Stable identity of a graph node.
///
/// Providers keep nodes in an arena; a `NodeId` is the index into that
/// arena and stays valid for the lifetime of the graph.
pub type NodeId = usize;

/// 2D point in the provider's normalized unit system
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn origin() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    pub fn distance(&self, other: &Point2D) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }

    pub fn to_vector(&self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }
}

impl From<(f64, f64)> for Point2D {
    fn from(tuple: (f64, f64)) -> Self {
        Self { x: tuple.0, y: tuple.1 }
    }
}

impl From<Vector2<f64>> for Point2D {
    fn from(v: Vector2<f64>) -> Self {
        Self { x: v[0], y: v[1] }
    }
}

/// One stop along a computed route
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteNode {
    pub id: NodeId,
    pub position: Point2D,
}

/// A computed route: node sequence in start-to-goal order plus the total
/// distance in real-world units (normalized edge lengths summed and
/// multiplied by the provider's metric scale).
#[derive(Debug, Clone)]
pub struct Route {
    pub nodes: Vec<RouteNode>,
    pub distance: f64,
}

impl Route {
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node_ids(&self) -> Vec<NodeId> {
        self.nodes.iter().map(|n| n.id).collect()
    }

    pub fn x_coords(&self) -> Vec<f64> {
        self.nodes.iter().map(|n| n.position.x).collect()
    }

    pub fn y_coords(&self) -> Vec<f64> {
        self.nodes.iter().map(|n| n.position.y).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point2d_distance() {
        let p1 = Point2D::new(0.0, 0.0);
        let p2 = Point2D::new(3.0, 4.0);
        assert!((p1.distance(&p2) - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_point2d_from_tuple() {
        let p: Point2D = (1.5, -2.0).into();
        assert_eq!(p, Point2D::new(1.5, -2.0));
    }

    #[test]
    fn test_route_accessors() {
        let route = Route {
            nodes: vec![
                RouteNode { id: 3, position: Point2D::new(0.0, 0.0) },
                RouteNode { id: 7, position: Point2D::new(1.0, 0.5) },
            ],
            distance: 42.0,
        };
        assert_eq!(route.len(), 2);
        assert_eq!(route.node_ids(), vec![3, 7]);
        assert_eq!(route.x_coords(), vec![0.0, 1.0]);
        assert_eq!(route.y_coords(), vec![0.0, 0.5]);
    }
}
