use std::path::{Path, PathBuf};

use colored::*;
use csv::Writer;
use tracing::{debug, error, info, span, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::constant::DEMO_SEED;
use crate::config::Settings;
use crate::distance::matrix::DistanceMatrix;
use crate::error::{Error, Result};
use crate::fixtures::data_generator::generate_demo_request;
use crate::setup::init::load_request;
use crate::solver::planner::{plan, PlannedRoute, RouteRequest, Strategy};
use crate::utils::{format_distance, format_route};

/// Initialize tracing; `RUST_LOG` controls the level.
fn init_tracing() {
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_span_events(fmt::format::FmtSpan::CLOSE))
        .try_init();
}

/// Entry point of the `route-optimizer` binary. A first argument overrides
/// the request path from the settings. Failures are printed here, so the
/// caller only has to set the exit status.
pub fn run() -> Result<()> {
    init_tracing();
    let mut settings = Settings::from_env()?;
    if let Some(path) = std::env::args().nth(1) {
        settings.request_path = PathBuf::from(path);
    }

    match run_with(&settings) {
        Ok(_) => Ok(()),
        Err(e) => {
            let message = failure_message(&e);
            if e.is_capacity() {
                eprintln!("{}", message.yellow());
            } else {
                error!("Route optimization failed: {}", e);
                eprintln!("{}", message.red());
            }
            Err(e)
        }
    }
}

/// What the user sees on stderr when a run fails.
fn failure_message(e: &Error) -> String {
    if e.is_capacity() {
        e.to_string()
    } else {
        format!("Error: {e}")
    }
}

/// Load, plan, report and write the route described by `settings`.
pub fn run_with(settings: &Settings) -> Result<PlannedRoute> {
    let (mut request, matrix) = load_inputs(settings)?;
    if let Some(nearest_first) = settings.nearest_first {
        request.nearest_first = nearest_first;
    }

    let planned = {
        let span = span!(Level::INFO, "optimize");
        let _guard = span.enter();
        plan(&request, &matrix)?
    };

    print_route(&planned, settings.trim_closing);

    if let Some(path) = &settings.output_csv {
        save_to_csv(&planned, settings.trim_closing, path)?;
        info!("Wrote optimized route to {}", path.display());
    }

    Ok(planned)
}

fn load_inputs(settings: &Settings) -> Result<(RouteRequest, DistanceMatrix)> {
    match settings.demo_stops {
        Some(stops) => Ok(generate_demo_request(stops, DEMO_SEED)),
        None => load_request(&settings.request_path),
    }
}

/// Waypoints to report, honouring the closing-duplicate setting.
fn reported_waypoints(planned: &PlannedRoute, trim_closing: bool) -> Vec<String> {
    if trim_closing {
        planned.route.clone().without_closing()
    } else {
        planned.route.waypoints.clone()
    }
}

fn print_route(planned: &PlannedRoute, trim_closing: bool) {
    let route = &planned.route;
    let waypoints = reported_waypoints(planned, trim_closing);

    let strategy = match planned.strategy {
        Strategy::Exhaustive => "exhaustive",
        Strategy::NearestFirst => "nearest-first",
    };
    println!(
        "{} ({}, {:?})",
        "Optimized Route".bold(),
        strategy,
        route.topology
    );

    if let Some(closest) = &planned.closest {
        println!(
            "First stop: {} ({})",
            closest.stop.cyan(),
            format_distance(closest.distance)
        );
    }

    for (i, waypoint) in waypoints.iter().enumerate() {
        println!("{:>3}. {}", i + 1, waypoint);
    }
    println!(
        "{}",
        format!("Distance: {}", format_distance(route.distance)).green()
    );
    debug!("Visiting order: {}", format_route(&waypoints));
}

fn save_to_csv(planned: &PlannedRoute, trim_closing: bool, filename: &Path) -> Result<()> {
    let mut wtr = Writer::from_path(filename)?;

    wtr.write_record(["position", "waypoint", "leg_distance"])?;

    let waypoints = reported_waypoints(planned, trim_closing);
    for (i, waypoint) in waypoints.iter().enumerate() {
        // Leg into this waypoint; the start has none.
        let leg = match i {
            0 => String::new(),
            _ => planned
                .route
                .legs
                .get(i - 1)
                .map(|d| format_distance(*d))
                .unwrap_or_default(),
        };
        wtr.write_record([(i + 1).to_string(), waypoint.clone(), leg])?;
    }

    wtr.flush()?;
    Ok(())
}
