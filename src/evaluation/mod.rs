pub mod fitness;

pub use fitness::*;
