use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::distance::matrix::{print_dist_matrix, DistanceMatrix};
use crate::distance::providers::{matrix_from_elements, read_matrix_csv};
use crate::error::{Error, Result};
use crate::setup::init_types::{DistanceSource, RequestFile};
use crate::solver::planner::RouteRequest;

/// Read a request file and the distance matrix it points at.
pub fn load_request(path: impl AsRef<Path>) -> Result<(RouteRequest, DistanceMatrix)> {
    let path = path.as_ref();
    let file_content = fs::read_to_string(path)?;
    let base_dir = path.parent().unwrap_or_else(|| Path::new("."));

    let (request, matrix) = parse_request(&file_content, base_dir)?;
    info!(
        "Loaded request from {} ({} stops)",
        path.display(),
        request.stops.len()
    );
    Ok((request, matrix))
}

/// Parse request JSON; `base_dir` anchors a relative `matrix_csv` path.
pub fn parse_request(json: &str, base_dir: &Path) -> Result<(RouteRequest, DistanceMatrix)> {
    let file: RequestFile = serde_json::from_str(json)?;

    let request = RouteRequest {
        start: file.start,
        end: file.end,
        stops: file.stops,
        nearest_first: file.nearest_first,
    };
    request.validate()?;

    let num_waypoints = request.waypoints().len();
    let matrix = resolve_matrix(file.distances, num_waypoints, base_dir)?;
    print_dist_matrix(&matrix);

    Ok((request, matrix))
}

fn resolve_matrix(
    source: DistanceSource,
    num_waypoints: usize,
    base_dir: &Path,
) -> Result<DistanceMatrix> {
    let given = [
        source.matrix.is_some(),
        source.elements.is_some(),
        source.matrix_csv.is_some(),
    ]
    .iter()
    .filter(|&&g| g)
    .count();
    if given > 1 {
        return Err(Error::invalid_request(
            "give only one of matrix, elements or matrix_csv",
        ));
    }

    if let Some(matrix) = source.matrix {
        debug!("Using inline distance matrix");
        return Ok(matrix);
    }
    if let Some(elements) = source.elements {
        debug!("Building matrix from {} route-matrix elements", elements.len());
        return matrix_from_elements(&elements, num_waypoints);
    }
    if let Some(csv_path) = source.matrix_csv {
        return read_matrix_csv(base_dir.join(csv_path));
    }

    // A lone waypoint needs no distances.
    if num_waypoints <= 1 {
        return Ok(DistanceMatrix::default());
    }
    Err(Error::EmptyMatrix(num_waypoints))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn inline_matrix() {
        let json = r#"{
            "start": "Home",
            "end": "Home",
            "stops": ["Bakery", ""],
            "matrix": [[0, 3, 0], [4, 0, 4], [0, 3, 0]]
        }"#;

        let (request, matrix) = parse_request(json, Path::new(".")).unwrap();
        assert_eq!(request.waypoints(), vec!["Home", "Bakery", "Home"]);
        assert!(!request.nearest_first);
        assert_eq!(matrix.cost(1, 0), 4.0);
    }

    #[test]
    fn route_matrix_elements() {
        let json = r#"{
            "start": "A",
            "end": "B",
            "nearest_first": true,
            "elements": [
                {"originIndex": 0, "destinationIndex": 1, "distanceMeters": 250}
            ]
        }"#;

        let (request, matrix) = parse_request(json, Path::new(".")).unwrap();
        assert!(request.nearest_first);
        assert_eq!(matrix.cost(0, 1), 250.0);
        assert!(matrix.cost(1, 0).is_infinite());
    }

    #[test]
    fn csv_path_is_relative_to_the_request() {
        let dir = tempfile::tempdir().unwrap();
        let mut csv = fs::File::create(dir.path().join("dm.csv")).unwrap();
        writeln!(csv, "0,5").unwrap();
        writeln!(csv, "6,0").unwrap();

        let request_path = dir.path().join("request.json");
        fs::write(
            &request_path,
            r#"{"start": "A", "end": "B", "matrix_csv": "dm.csv"}"#,
        )
        .unwrap();

        let (_, matrix) = load_request(&request_path).unwrap();
        assert_eq!(matrix.cost(0, 1), 5.0);
        assert_eq!(matrix.cost(1, 0), 6.0);
    }

    #[test]
    fn missing_distances_is_an_empty_matrix() {
        let json = r#"{"start": "A", "end": "B", "stops": ["C"]}"#;
        let err = parse_request(json, Path::new(".")).unwrap_err();
        assert!(matches!(err, Error::EmptyMatrix(3)));
    }

    #[test]
    fn conflicting_sources_are_rejected() {
        let json = r#"{
            "start": "A",
            "end": "B",
            "matrix": [[0, 1], [1, 0]],
            "matrix_csv": "dm.csv"
        }"#;
        let err = parse_request(json, Path::new(".")).unwrap_err();
        assert!(matches!(err, Error::InvalidRequest(_)));
    }

    #[test]
    fn malformed_json_is_reported() {
        let err = parse_request("{", Path::new(".")).unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }
}
