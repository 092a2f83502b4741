use serde::Serialize;

/// Whether the route closes back onto its start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Topology {
    OneWay,
    RoundTrip,
}

impl Topology {
    /// Round trip when the first and last waypoints carry the same identifier.
    pub fn detect<W: PartialEq>(waypoints: &[W]) -> Self {
        match (waypoints.first(), waypoints.last()) {
            (Some(first), Some(last)) if waypoints.len() >= 2 && first == last => Self::RoundTrip,
            _ => Self::OneWay,
        }
    }

    pub fn is_round_trip(self) -> bool {
        self == Self::RoundTrip
    }
}

impl From<bool> for Topology {
    fn from(is_round_trip: bool) -> Self {
        if is_round_trip {
            Self::RoundTrip
        } else {
            Self::OneWay
        }
    }
}

/// An ordered visiting plan over a caller's waypoint list.
///
/// `positions[i]` is the input position of `waypoints[i]` and `legs[i]` is
/// the cost of travelling from `waypoints[i]` to `waypoints[i + 1]`.
///
/// A one-way route ends on the caller's end waypoint. A round trip ends back
/// on the start: the exhaustive search appends a return to position 0 after
/// visiting every input position, while a nearest-first route ends on the
/// caller's closing copy. Use [`Route::without_closing`] to drop that final
/// entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route<W> {
    pub waypoints: Vec<W>,
    pub positions: Vec<usize>,
    pub legs: Vec<f64>,
    pub distance: f64,
    pub topology: Topology,
}

impl<W> Route<W> {
    /// Route for inputs with no ordering decision to make.
    pub(crate) fn unchanged(waypoints: Vec<W>, topology: Topology) -> Self {
        let positions = (0..waypoints.len()).collect();
        Self {
            waypoints,
            positions,
            legs: vec![],
            distance: 0.0,
            topology,
        }
    }

    pub fn is_round_trip(&self) -> bool {
        self.topology.is_round_trip()
    }

    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    /// Visiting order with the final return to the start dropped for round
    /// trips. One-way routes are returned as they are.
    pub fn without_closing(mut self) -> Vec<W> {
        if self.is_round_trip() && self.waypoints.len() >= 2 {
            self.waypoints.pop();
        }
        self.waypoints
    }
}

/// The stop nearest the start, as picked for a nearest-first route.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClosestStop<W> {
    pub stop: W,
    /// Position within the candidate stop list, not the full waypoint list.
    pub index: usize,
    pub distance: f64,
}
