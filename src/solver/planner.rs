use serde::{Deserialize, Serialize};
use tracing::{info, span, warn, Level};

use super::exhaustive::{optimize, optimize_nearest_first};
use crate::distance::matrix::DistanceMatrix;
use crate::domain::types::{ClosestStop, Route, Topology};
use crate::error::{Error, Result};

/// A single routing request: where to start, where to finish and what to
/// visit in between.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteRequest {
    pub start: String,
    pub end: String,
    #[serde(default)]
    pub stops: Vec<String>,
    #[serde(default)]
    pub nearest_first: bool,
}

impl RouteRequest {
    pub fn new(start: impl Into<String>, end: impl Into<String>, stops: Vec<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
            stops,
            nearest_first: false,
        }
    }

    pub fn with_nearest_first(mut self, nearest_first: bool) -> Self {
        self.nearest_first = nearest_first;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.start.trim().is_empty() || self.end.trim().is_empty() {
            return Err(Error::invalid_request("a start and an end address are required"));
        }
        Ok(())
    }

    /// `[start] + non-blank stops + [end]`; the distance matrix for a request
    /// is indexed by this list.
    pub fn waypoints(&self) -> Vec<String> {
        std::iter::once(self.start.clone())
            .chain(self.stops.iter().filter(|s| !s.trim().is_empty()).cloned())
            .chain(std::iter::once(self.end.clone()))
            .collect()
    }

    pub fn topology(&self) -> Topology {
        Topology::from(self.start == self.end)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    Exhaustive,
    NearestFirst,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlannedRoute {
    pub route: Route<String>,
    pub closest: Option<ClosestStop<String>>,
    pub strategy: Strategy,
}

/// Plan a request against a matrix indexed by [`RouteRequest::waypoints`].
pub fn plan(request: &RouteRequest, matrix: &DistanceMatrix) -> Result<PlannedRoute> {
    request.validate()?;

    let waypoints = request.waypoints();
    let topology = request.topology();

    let plan_span = span!(
        Level::INFO,
        "plan",
        waypoints = waypoints.len(),
        nearest_first = request.nearest_first
    );
    let _guard = plan_span.enter();

    info!(
        "Planning {:?} route over {} waypoints",
        topology,
        waypoints.len()
    );

    if request.nearest_first {
        match optimize_nearest_first(&waypoints, matrix, topology)? {
            Some((route, closest)) => {
                return Ok(PlannedRoute {
                    route,
                    closest: Some(closest),
                    strategy: Strategy::NearestFirst,
                })
            }
            None => warn!("No stops to visit first, falling back to exhaustive search"),
        }
    }

    let route = optimize(&waypoints, matrix, topology)?;
    Ok(PlannedRoute {
        route,
        closest: None,
        strategy: Strategy::Exhaustive,
    })
}
