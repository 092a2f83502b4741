use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::info;

use crate::distance::matrix::DistanceMatrix;
use crate::solver::planner::RouteRequest;

const MIN_COST: u32 = 1;
const MAX_COST: u32 = 1_000;
const DEPOT: &str = "Depot";

/// Labels `W0`, `W1`, ... for anonymous waypoints.
pub fn waypoint_labels(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("W{i}")).collect()
}

/// Seeded random matrix with whole-number costs and a zero diagonal.
pub fn random_matrix(size: usize, seed: u64, symmetric: bool) -> DistanceMatrix {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut dm = DistanceMatrix::unreachable(size);

    for i in 0..size {
        for j in 0..size {
            if i == j || (symmetric && j < i) {
                continue;
            }
            let cost = f64::from(rng.gen_range(MIN_COST..=MAX_COST));
            dm.set(i, j, cost);
            if symmetric {
                dm.set(j, i, cost);
            }
        }
    }

    dm
}

/// Round trip from a depot through `stop_count` numbered stops, with a
/// matrix covering the request's waypoints. The closing depot entry shares
/// the start's costs.
pub fn generate_demo_request(stop_count: usize, seed: u64) -> (RouteRequest, DistanceMatrix) {
    let stops: Vec<String> = (1..=stop_count).map(|i| format!("Stop {i}")).collect();
    let request = RouteRequest::new(DEPOT, DEPOT, stops);

    let n = stop_count + 2;
    let base = random_matrix(n - 1, seed, false);
    let positions: Vec<usize> = (0..n - 1).chain(std::iter::once(0)).collect();
    let matrix = base.select(&positions);

    info!(
        "Generated demo request with {} stops (seed {})",
        stop_count, seed
    );
    (request, matrix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_matrix() {
        assert_eq!(random_matrix(5, 9, false), random_matrix(5, 9, false));
        assert_ne!(random_matrix(5, 9, false), random_matrix(5, 10, false));
    }

    #[test]
    fn costs_are_in_range_with_zero_diagonal() {
        let matrix = random_matrix(6, 1, false);
        for i in 0..6 {
            for j in 0..6 {
                let cost = matrix.cost(i, j);
                if i == j {
                    assert_eq!(cost, 0.0);
                } else {
                    assert!((1.0..=1_000.0).contains(&cost));
                }
            }
        }
    }

    #[test]
    fn symmetric_matrices_mirror() {
        let matrix = random_matrix(5, 2, true);
        for i in 0..5 {
            for j in 0..5 {
                assert_eq!(matrix.cost(i, j), matrix.cost(j, i));
            }
        }
    }

    #[test]
    fn demo_request_matches_its_matrix() {
        let (request, matrix) = generate_demo_request(4, 7);
        let waypoints = request.waypoints();

        assert_eq!(waypoints.len(), 6);
        assert_eq!(matrix.size(), 6);
        assert_eq!(waypoints.first(), waypoints.last());
        assert_eq!(matrix.row(0), matrix.row(5));
        assert_eq!(matrix.cost(0, 5), 0.0);
    }
}
