//! Minimum-distance visiting order for a start, an end and up to eight
//! stops, given a directed distance matrix.
//!
//! ```
//! use route_optimizer::{optimize, DistanceMatrix};
//!
//! let matrix = DistanceMatrix::from_rows(vec![
//!     vec![0.0, 9.0, 1.0, 0.0],
//!     vec![1.0, 0.0, 9.0, 1.0],
//!     vec![9.0, 1.0, 0.0, 9.0],
//!     vec![0.0, 9.0, 1.0, 0.0],
//! ])
//! .unwrap();
//!
//! // Round trip: the path returns to the start after every other position.
//! let route = optimize(&["A", "B", "C", "A"], &matrix, true).unwrap();
//! assert_eq!(route.positions, vec![0, 2, 1, 3, 0]);
//! assert_eq!(route.without_closing(), vec!["A", "C", "B", "A"]);
//! ```

pub mod config;
pub mod distance;
pub mod domain;
pub mod error;
pub mod evaluation;
pub mod fixtures;
pub mod runner;
pub mod setup;
pub mod solver;
pub mod utils;

pub use distance::DistanceMatrix;
pub use domain::{ClosestStop, Route, Topology};
pub use error::{Error, Result};
pub use solver::exhaustive::{optimize, optimize_nearest_first, select_closest};
pub use solver::planner::{plan, PlannedRoute, RouteRequest, Strategy};
