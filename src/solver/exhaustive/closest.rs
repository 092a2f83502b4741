use tracing::{debug, info, span, warn, Level};

use super::search::optimize;
use crate::config::constant::MAX_NEAREST_FIRST_STOPS;
use crate::distance::matrix::DistanceMatrix;
use crate::domain::types::{ClosestStop, Route, Topology};
use crate::error::{Error, Result};
use crate::evaluation::fitness::improves;

/// Pick the stop with the lowest directed cost from `start`.
///
/// `distance_fn` returns one cost per stop, in stop order. Costs it does
/// not supply count as unreachable. Ties go to the earliest stop. Returns
/// `None` when there are no stops to choose from.
pub fn select_closest<W, F>(start: &W, stops: &[W], distance_fn: F) -> Option<ClosestStop<W>>
where
    W: Clone,
    F: FnOnce(&W, &[W]) -> Vec<f64>,
{
    if stops.is_empty() {
        return None;
    }

    let costs = distance_fn(start, stops);
    let cost_at = |i: usize| costs.get(i).copied().unwrap_or(f64::INFINITY);

    let mut index = 0;
    for i in 1..stops.len() {
        if improves(cost_at(i), cost_at(index)) {
            index = i;
        }
    }

    debug!("Closest stop is #{} at {:.2}", index, cost_at(index));
    Some(ClosestStop {
        stop: stops[index].clone(),
        index,
        distance: cost_at(index),
    })
}

/// Two-phase route: visit the stop nearest the start first, then order the
/// remaining stops exhaustively between that stop and the end.
///
/// `matrix` covers the full `[start, stops..., end]` list. The result has
/// the same shape as [`optimize`]. Returns `Ok(None)` when there is no stop
/// to pin, and [`Error::CapacityExceeded`] for more than nine stops.
pub fn optimize_nearest_first<W, T>(
    waypoints: &[W],
    matrix: &DistanceMatrix,
    topology: T,
) -> Result<Option<(Route<W>, ClosestStop<W>)>>
where
    W: Clone,
    T: Into<Topology>,
{
    let topology = topology.into();
    let n = waypoints.len();
    let stop_count = n.saturating_sub(2);
    if stop_count > MAX_NEAREST_FIRST_STOPS {
        warn!(
            "Refusing nearest-first route over {} stops (limit {})",
            stop_count, MAX_NEAREST_FIRST_STOPS
        );
        return Err(Error::CapacityExceeded {
            stops: stop_count,
            max_stops: MAX_NEAREST_FIRST_STOPS,
        });
    }
    if n < 3 {
        return Ok(None);
    }
    if matrix.size() != n {
        return Err(Error::SizeMismatch {
            matrix: matrix.size(),
            waypoints: n,
        });
    }

    let nearest_span = span!(Level::DEBUG, "nearest_first", waypoints = n, ?topology);
    let _guard = nearest_span.enter();

    let stops = &waypoints[1..n - 1];
    let Some(closest) = select_closest(&waypoints[0], stops, |_, stops| {
        matrix.row(0)[1..=stops.len()].to_vec()
    }) else {
        return Ok(None);
    };
    let first = closest.index + 1;

    // Sub-problem: [closest] + remaining stops + [end], solved one way.
    let end_cost_position = if topology.is_round_trip() { 0 } else { n - 1 };
    let mut cost_positions = vec![first];
    cost_positions.extend((1..n - 1).filter(|&p| p != first));
    cost_positions.push(end_cost_position);

    let mut sub_waypoints: Vec<W> = cost_positions[..n - 2]
        .iter()
        .map(|&p| waypoints[p].clone())
        .collect();
    sub_waypoints.push(waypoints[n - 1].clone());

    let sub_matrix = matrix.select(&cost_positions);
    let sub_route = optimize(&sub_waypoints, &sub_matrix, Topology::OneWay)?;

    let mut positions = Vec::with_capacity(n);
    positions.push(0);
    positions.extend(sub_route.positions[..n - 2].iter().map(|&p| cost_positions[p]));
    positions.push(n - 1);

    let mut legs = Vec::with_capacity(n - 1);
    legs.push(closest.distance);
    legs.extend(sub_route.legs);

    let mut route_waypoints = Vec::with_capacity(n);
    route_waypoints.push(waypoints[0].clone());
    route_waypoints.extend(sub_route.waypoints);

    let route = Route {
        waypoints: route_waypoints,
        positions,
        distance: closest.distance + sub_route.distance,
        legs,
        topology,
    };

    info!(
        "Nearest-first route: stop #{} first, total distance {:.2}",
        closest.index, route.distance
    );

    Ok(Some((route, closest)))
}
