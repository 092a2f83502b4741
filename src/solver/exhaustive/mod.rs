pub mod closest;
pub mod permutation;
pub mod search;

pub use closest::*;
pub use permutation::*;
pub use search::*;
