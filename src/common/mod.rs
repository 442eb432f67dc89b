//! Common types, traits, and error definitions for route_planner
//!
//! This module provides the foundational building blocks used by the
//! search engine and the graph adapters.

pub mod types;
pub mod traits;
pub mod error;

pub use types::*;
pub use traits::*;
pub use error::*;
