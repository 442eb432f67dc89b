// Route search module

pub mod frontier;
pub mod planner;

pub use frontier::*;
pub use planner::*;
