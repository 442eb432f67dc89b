//! RoutePlanner - A* route search on road-network graphs
//!
//! This crate finds a shortest route between two points on a geometric
//! graph using A* search guided by a straight-line-distance heuristic.
//! The map graph itself is an external collaborator consumed through the
//! [`RouteGraph`](common::RouteGraph) trait; an in-memory adapter is
//! provided for tests and self-contained use.

// Core modules
pub mod common;

// Algorithm modules
pub mod graph;
pub mod routing;

// Re-export common types for convenience
pub use common::{NodeId, Point2D, Route, RouteNode};
pub use common::RouteGraph;
pub use common::{RoutingError, RoutingResult};
pub use graph::MemoryGraph;
pub use routing::{plan_route, RoutePlanner, SearchState};
