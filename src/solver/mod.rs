pub mod exhaustive;
pub mod planner;
