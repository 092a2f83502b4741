pub mod csv_file;
pub mod google;

pub use csv_file::{read_matrix, read_matrix_csv};
pub use google::{matrix_from_elements, parse_route_matrix, RouteMatrixElement};
