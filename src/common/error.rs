//! Error types for route_planner

use std::fmt;

/// Main error type for routing operations
#[derive(Debug)]
pub enum RoutingError {
    /// No graph node exists near a given input coordinate
    NodeNotFound(String),
    /// The frontier emptied before the goal was reached; start and goal
    /// are not connected
    NoPath(String),
    /// Path reconstruction invoked without a successful search
    InvalidState(String),
    /// Invalid parameter
    InvalidParameter(String),
}

impl fmt::Display for RoutingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoutingError::NodeNotFound(msg) => write!(f, "Node not found: {}", msg),
            RoutingError::NoPath(msg) => write!(f, "No path: {}", msg),
            RoutingError::InvalidState(msg) => write!(f, "Invalid state: {}", msg),
            RoutingError::InvalidParameter(msg) => write!(f, "Invalid parameter: {}", msg),
        }
    }
}

impl std::error::Error for RoutingError {}

/// Result type alias for routing operations
pub type RoutingResult<T> = Result<T, RoutingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RoutingError::NoPath("goal unreachable from start".to_string());
        assert_eq!(format!("{}", err), "No path: goal unreachable from start");
    }

    #[test]
    fn test_error_is_std_error() {
        let err = RoutingError::NodeNotFound("empty graph".to_string());
        let dyn_err: &dyn std::error::Error = &err;
        assert!(dyn_err.source().is_none());
    }
}
