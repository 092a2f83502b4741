pub mod init;
pub mod init_types;

pub use init::{load_request, parse_request};
