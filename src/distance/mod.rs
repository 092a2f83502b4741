pub mod matrix;
pub mod providers;

pub use matrix::DistanceMatrix;
