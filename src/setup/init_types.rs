use std::path::PathBuf;

use serde::Deserialize;

use crate::distance::matrix::DistanceMatrix;
use crate::distance::providers::RouteMatrixElement;

/// Struct to match the request JSON structure
#[derive(Debug, Deserialize)]
pub struct RequestFile {
    pub start: String,
    pub end: String,
    #[serde(default)]
    pub stops: Vec<String>,
    #[serde(default)]
    pub nearest_first: bool,
    #[serde(flatten)]
    pub distances: DistanceSource,
}

/// Where the request's distances come from. At most one should be given.
#[derive(Debug, Default, Deserialize)]
pub struct DistanceSource {
    pub matrix: Option<DistanceMatrix>,
    pub elements: Option<Vec<RouteMatrixElement>>,
    /// Relative paths resolve against the request file's directory.
    pub matrix_csv: Option<PathBuf>,
}
