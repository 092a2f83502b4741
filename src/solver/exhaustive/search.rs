use tracing::{debug, info, span, trace, warn, Level};

use super::permutation::{next_permutation, permutation_count};
use crate::config::constant::{MAX_FREE_WAYPOINTS, MAX_WAYPOINTS};
use crate::distance::matrix::DistanceMatrix;
use crate::domain::types::{Route, Topology};
use crate::error::{Error, Result};
use crate::evaluation::fitness::{find_distance, improves, leg_distances};

/// Cheapest path seen so far during the enumeration.
#[derive(Debug, Clone)]
struct BestPath {
    path: Vec<usize>,
    distance: f64,
    found_at: u64,
}

/// Order the waypoints so that the total travelled distance is minimal.
///
/// Position 0 is always the start. A one-way route also keeps its last
/// position as the end and permutes everything in between. A round trip
/// permutes every position after the start, the caller's closing copy
/// included, and a return to position 0 is appended to the path. On equal
/// cost the lexicographically smallest arrangement wins.
///
/// Fails with [`Error::CapacityExceeded`] before doing any work when more
/// than ten waypoints are supplied.
pub fn optimize<W, T>(waypoints: &[W], matrix: &DistanceMatrix, topology: T) -> Result<Route<W>>
where
    W: Clone,
    T: Into<Topology>,
{
    let topology = topology.into();
    let n = waypoints.len();

    if n > MAX_WAYPOINTS {
        let stops = n - 2;
        warn!(
            "Refusing to optimize {} waypoints ({} stops, limit {})",
            n, stops, MAX_FREE_WAYPOINTS
        );
        return Err(Error::CapacityExceeded {
            stops,
            max_stops: MAX_FREE_WAYPOINTS,
        });
    }

    if n <= 1 {
        debug!("{} waypoint(s), nothing to order", n);
        return Ok(Route::unchanged(waypoints.to_vec(), topology));
    }

    if matrix.size() != n {
        return Err(Error::SizeMismatch {
            matrix: matrix.size(),
            waypoints: n,
        });
    }

    let search_span = span!(Level::DEBUG, "exhaustive_search", waypoints = n, ?topology);
    let _guard = search_span.enter();

    // Free positions are path[1..=last_free].
    let (last_free, closing) = match topology {
        Topology::RoundTrip => (n - 1, 0),
        Topology::OneWay => (n - 2, n - 1),
    };

    // [start] + free positions ascending + [end or return to start]
    let mut path: Vec<usize> = Vec::with_capacity(n + 1);
    path.push(0);
    path.extend(1..=last_free);
    path.push(closing);

    debug!(
        "Searching {} arrangements of {} free positions",
        permutation_count(last_free),
        last_free
    );

    let mut best = BestPath {
        distance: find_distance(&path, matrix),
        path: path.clone(),
        found_at: 1,
    };
    let mut evaluated: u64 = 1;

    while next_permutation(&mut path[1..=last_free]) {
        evaluated += 1;
        let distance = find_distance(&path, matrix);
        if improves(distance, best.distance) {
            trace!("New best {:.2} at arrangement {}: {:?}", distance, evaluated, path);
            best.path.copy_from_slice(&path);
            best.distance = distance;
            best.found_at = evaluated;
        }
    }

    info!(
        "Best distance {:.2} found at arrangement {} of {}",
        best.distance, best.found_at, evaluated
    );

    Ok(build_route(waypoints, matrix, best, topology))
}

fn build_route<W: Clone>(
    waypoints: &[W],
    matrix: &DistanceMatrix,
    best: BestPath,
    topology: Topology,
) -> Route<W> {
    let legs = leg_distances(&best.path, matrix);

    Route {
        waypoints: best.path.iter().map(|&p| waypoints[p].clone()).collect(),
        positions: best.path,
        legs,
        distance: best.distance,
        topology,
    }
}
