// Graph adapters module

pub mod memory_graph;

pub use memory_graph::*;
