use itertools::Itertools;

use crate::distance::matrix::DistanceMatrix;

/// Total cost of walking `path` edge by edge.
pub fn find_distance(path: &[usize], dm: &DistanceMatrix) -> f64 {
    path.iter()
        .tuple_windows()
        .map(|(&from, &to)| dist_between(from, to, dm))
        .sum()
}

/// Cost of each consecutive edge in `path`.
pub fn leg_distances(path: &[usize], dm: &DistanceMatrix) -> Vec<f64> {
    path.iter()
        .tuple_windows()
        .map(|(&from, &to)| dist_between(from, to, dm))
        .collect()
}

pub fn dist_between(from_loc: usize, to_loc: usize, dm: &DistanceMatrix) -> f64 {
    dm.cost(from_loc, to_loc)
}

/// Whether `candidate` should replace the incumbent best distance.
/// Ties keep the incumbent; a NaN incumbent loses to any number.
pub fn improves(candidate: f64, incumbent: f64) -> bool {
    candidate < incumbent || (incumbent.is_nan() && !candidate.is_nan())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dm() -> DistanceMatrix {
        DistanceMatrix::from_rows(vec![
            vec![0.0, 1.0, 10.0],
            vec![2.0, 0.0, 3.0],
            vec![4.0, 5.0, 0.0],
        ])
        .unwrap()
    }

    #[test]
    fn sums_directed_edges() {
        assert_eq!(find_distance(&[0, 1, 2], &dm()), 4.0);
        assert_eq!(find_distance(&[2, 1, 0], &dm()), 7.0);
        assert_eq!(find_distance(&[0, 1, 2, 0], &dm()), 8.0);
    }

    #[test]
    fn short_paths_cost_nothing() {
        assert_eq!(find_distance(&[], &dm()), 0.0);
        assert_eq!(find_distance(&[1], &dm()), 0.0);
    }

    #[test]
    fn legs_follow_the_path() {
        assert_eq!(leg_distances(&[0, 2, 1], &dm()), vec![10.0, 5.0]);
    }

    #[test]
    fn unavailable_edges_dominate() {
        let mut matrix = dm();
        matrix.set(0, 1, f64::INFINITY);
        assert!(find_distance(&[0, 1, 2], &matrix).is_infinite());
    }

    #[test]
    fn ties_keep_the_incumbent() {
        assert!(improves(1.0, 2.0));
        assert!(!improves(2.0, 2.0));
        assert!(!improves(f64::NAN, 2.0));
        assert!(improves(f64::INFINITY, f64::NAN));
        assert!(!improves(f64::INFINITY, f64::INFINITY));
    }
}
