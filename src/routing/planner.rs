//! A* search engine and path reconstruction
//!
//! The planner snaps two input coordinates to graph nodes, then runs a
//! best-first expand/select loop over the [`Frontier`] until the goal is
//! reached or the frontier is exhausted. The heuristic is the
//! straight-line distance to the goal, which on a road network never
//! overestimates the remaining cost (edges are at least as long as the
//! straight line) and is consistent, so a node never needs to be
//! re-opened after its first discovery. Per-search bookkeeping lives in
//! a side table keyed by node id; the graph itself is never mutated.

use std::collections::HashMap;

use crate::common::{NodeId, Point2D, Route, RouteGraph, RouteNode, RoutingError, RoutingResult};
use crate::routing::frontier::Frontier;

/// Search lifecycle: `Running` until the goal is extracted (`Found`) or
/// the frontier empties (`NoPath`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchState {
    Running,
    Found,
    NoPath,
}

/// Per-node search state, fixed at discovery and never revised.
///
/// Presence in the side table doubles as the visited flag.
#[derive(Debug, Clone, Copy)]
struct NodeRecord {
    g: f64,
    h: f64,
    parent: Option<NodeId>,
}

/// A* route planner over a [`RouteGraph`].
///
/// One planner instance serves exactly one search. Inputs are coordinate
/// pairs expressed as percentages (0-100) of the map bounding box and are
/// normalized to the provider's 0-1 space before the nearest-node snap.
pub struct RoutePlanner<'a, G: RouteGraph> {
    graph: &'a G,
    start: NodeId,
    goal: NodeId,
    frontier: Frontier,
    records: HashMap<NodeId, NodeRecord>,
    state: SearchState,
    expanded: usize,
}

impl<'a, G: RouteGraph> RoutePlanner<'a, G> {
    /// Create a planner for a start/goal pair given in percent coordinates
    pub fn new(graph: &'a G, start_pct: (f64, f64), goal_pct: (f64, f64)) -> RoutingResult<Self> {
        let start = graph.closest_node(normalize_input(start_pct)?)?;
        let goal = graph.closest_node(normalize_input(goal_pct)?)?;

        Ok(RoutePlanner {
            graph,
            start,
            goal,
            frontier: Frontier::new(),
            records: HashMap::new(),
            state: SearchState::Running,
            expanded: 0,
        })
    }

    /// Create a planner between two already-known graph nodes,
    /// skipping the percent-coordinate snap
    pub fn from_nodes(graph: &'a G, start: NodeId, goal: NodeId) -> Self {
        RoutePlanner {
            graph,
            start,
            goal,
            frontier: Frontier::new(),
            records: HashMap::new(),
            state: SearchState::Running,
            expanded: 0,
        }
    }

    /// Node the start input snapped to
    pub fn start(&self) -> NodeId {
        self.start
    }

    /// Node the goal input snapped to
    pub fn goal(&self) -> NodeId {
        self.goal
    }

    pub fn state(&self) -> SearchState {
        self.state
    }

    /// Number of nodes expanded so far
    pub fn expanded(&self) -> usize {
        self.expanded
    }

    /// Run the search to completion and return the route.
    ///
    /// Fails with [`RoutingError::NoPath`] when start and goal lie in
    /// disconnected components, and with [`RoutingError::InvalidState`]
    /// if the planner has already finished a search.
    pub fn search(&mut self) -> RoutingResult<Route> {
        if self.state != SearchState::Running {
            return Err(RoutingError::InvalidState(
                "planner has already finished its search".to_string(),
            ));
        }

        let start_h = self.graph.distance(self.start, self.goal);
        self.records.insert(
            self.start,
            NodeRecord { g: 0.0, h: start_h, parent: None },
        );

        let mut current = self.start;
        loop {
            if current == self.goal {
                self.state = SearchState::Found;
                return self.reconstruct(current);
            }

            self.expand(current);

            match self.frontier.pop() {
                Some((id, _g)) => current = id,
                None => {
                    self.state = SearchState::NoPath;
                    return Err(RoutingError::NoPath(format!(
                        "goal unreachable after expanding {} nodes",
                        self.expanded
                    )));
                }
            }
        }
    }

    /// Reconstruct the route of a finished search.
    ///
    /// Fails with [`RoutingError::InvalidState`] unless the search ended
    /// in [`SearchState::Found`].
    pub fn final_route(&self) -> RoutingResult<Route> {
        if self.state != SearchState::Found {
            return Err(RoutingError::InvalidState(
                "no route available: search did not finish in Found".to_string(),
            ));
        }
        self.reconstruct(self.goal)
    }

    /// Discover every unvisited neighbor of `current`
    fn expand(&mut self, current: NodeId) {
        let current_g = self.records[&current].g;

        for neighbor in self.graph.neighbors(current) {
            if self.records.contains_key(&neighbor) {
                continue;
            }
            let g = current_g + self.graph.distance(current, neighbor);
            let h = self.graph.distance(neighbor, self.goal);
            self.records.insert(
                neighbor,
                NodeRecord { g, h, parent: Some(current) },
            );
            self.frontier.push(neighbor, g, h);
        }

        self.expanded += 1;
    }

    /// Walk parent links from `terminal` back to the start node,
    /// accumulating edge distances, then emit the route in
    /// start-to-goal order scaled to real-world units.
    fn reconstruct(&self, terminal: NodeId) -> RoutingResult<Route> {
        let mut nodes = Vec::new();
        let mut distance = 0.0;
        let mut cursor = terminal;

        loop {
            nodes.push(RouteNode {
                id: cursor,
                position: self.graph.position(cursor),
            });
            if cursor == self.start {
                break;
            }

            let record = self.records.get(&cursor).ok_or_else(|| {
                RoutingError::InvalidState(format!("node {} missing from search records", cursor))
            })?;
            let parent = record.parent.ok_or_else(|| {
                RoutingError::InvalidState(format!("parent chain broken at node {}", cursor))
            })?;

            distance += self.graph.distance(cursor, parent);
            cursor = parent;
        }

        nodes.reverse();
        Ok(Route {
            nodes,
            distance: distance * self.graph.metric_scale(),
        })
    }
}

/// Plan a route in one call (convenience wrapper)
pub fn plan_route<G: RouteGraph>(
    graph: &G,
    start_pct: (f64, f64),
    goal_pct: (f64, f64),
) -> RoutingResult<Route> {
    RoutePlanner::new(graph, start_pct, goal_pct)?.search()
}

/// Validate a percent-coordinate pair and map it into 0-1 space
fn normalize_input(pct: (f64, f64)) -> RoutingResult<Point2D> {
    let (x, y) = pct;
    if !x.is_finite() || !y.is_finite() || !(0.0..=100.0).contains(&x) || !(0.0..=100.0).contains(&y)
    {
        return Err(RoutingError::InvalidParameter(format!(
            "coordinates must be percentages in [0, 100], got ({}, {})",
            x, y
        )));
    }
    Ok(Point2D::new(x * 0.01, y * 0.01))
}
