use serde::Deserialize;
use tracing::{debug, warn};

use crate::distance::matrix::DistanceMatrix;
use crate::error::{Error, Result};

/// One entry of a `computeRouteMatrix` response, requested with the field
/// mask `originIndex,destinationIndex,distanceMeters`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteMatrixElement {
    #[serde(default)]
    pub origin_index: usize,
    #[serde(default)]
    pub destination_index: usize,
    pub distance_meters: Option<f64>,
}

/// Parse a route-matrix response body for `num_waypoints` waypoints.
pub fn parse_route_matrix(body: &str, num_waypoints: usize) -> Result<DistanceMatrix> {
    let elements: Vec<RouteMatrixElement> = serde_json::from_str(body)?;
    matrix_from_elements(&elements, num_waypoints)
}

/// Fill a matrix from sparse elements. Pairs with no element, or an element
/// without a distance, stay unreachable.
pub fn matrix_from_elements(
    elements: &[RouteMatrixElement],
    num_waypoints: usize,
) -> Result<DistanceMatrix> {
    let mut dm = DistanceMatrix::unreachable(num_waypoints);

    let mut missing = 0;
    for element in elements {
        let (origin, destination) = (element.origin_index, element.destination_index);
        if origin >= num_waypoints || destination >= num_waypoints {
            return Err(Error::ElementOutOfRange {
                origin,
                destination,
                size: num_waypoints,
            });
        }

        match element.distance_meters {
            Some(distance) => dm.set(origin, destination, distance),
            None => {
                missing += 1;
                dm.set(origin, destination, f64::INFINITY);
            }
        }
    }

    let expected = num_waypoints * num_waypoints;
    if missing > 0 || elements.len() < expected {
        warn!(
            "Route matrix incomplete: {} of {} elements, {} without distance",
            elements.len(),
            expected,
            missing
        );
    }
    debug!("Built {}x{} matrix from route-matrix elements", num_waypoints, num_waypoints);

    Ok(dm)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_camel_case_elements() {
        let body = r#"[
            {"originIndex": 0, "destinationIndex": 1, "distanceMeters": 1200},
            {"originIndex": 1, "destinationIndex": 0, "distanceMeters": 1350},
            {"destinationIndex": 0, "distanceMeters": 0},
            {"originIndex": 1, "destinationIndex": 1}
        ]"#;

        let matrix = parse_route_matrix(body, 2).unwrap();
        assert_eq!(matrix.cost(0, 1), 1200.0);
        assert_eq!(matrix.cost(1, 0), 1350.0);
        assert_eq!(matrix.cost(0, 0), 0.0);
        assert!(matrix.cost(1, 1).is_infinite());
    }

    #[test]
    fn missing_pairs_are_unreachable() {
        let elements = vec![RouteMatrixElement {
            origin_index: 0,
            destination_index: 2,
            distance_meters: Some(40.0),
        }];

        let matrix = matrix_from_elements(&elements, 3).unwrap();
        assert_eq!(matrix.cost(0, 2), 40.0);
        assert!(matrix.cost(2, 0).is_infinite());
        assert_eq!(matrix.cost(1, 1), 0.0);
    }

    #[test]
    fn rejects_out_of_range_indices() {
        let elements = vec![RouteMatrixElement {
            origin_index: 3,
            destination_index: 0,
            distance_meters: Some(1.0),
        }];

        let err = matrix_from_elements(&elements, 3).unwrap_err();
        assert!(matches!(
            err,
            Error::ElementOutOfRange {
                origin: 3,
                destination: 0,
                size: 3
            }
        ));
    }
}
