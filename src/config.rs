use std::env;
use std::path::PathBuf;

use dotenv::dotenv;
use tracing::{debug, info};

use self::constant::MAX_NEAREST_FIRST_STOPS;
use crate::error::{Error, Result};

pub mod constant {
    /// Start and end plus at most eight stops.
    pub const MAX_WAYPOINTS: usize = 10;
    pub const MAX_FREE_WAYPOINTS: usize = MAX_WAYPOINTS - 2;
    /// Nearest-first pins one stop before searching the rest.
    pub const MAX_NEAREST_FIRST_STOPS: usize = MAX_FREE_WAYPOINTS + 1;
    pub(crate) const DEFAULT_REQUEST_PATH: &str = "route_request.json";
    pub(crate) const DEFAULT_OUTPUT_CSV: &str = "optimized_route.csv";
    pub(crate) const DEMO_SEED: u64 = 12345;
}

/// Runtime settings for the `route-optimizer` binary.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub request_path: PathBuf,
    pub output_csv: Option<PathBuf>,
    pub trim_closing: bool,
    pub nearest_first: Option<bool>,
    pub demo_stops: Option<usize>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            request_path: PathBuf::from(constant::DEFAULT_REQUEST_PATH),
            output_csv: Some(PathBuf::from(constant::DEFAULT_OUTPUT_CSV)),
            trim_closing: false,
            nearest_first: None,
            demo_stops: None,
        }
    }
}

impl Settings {
    /// Load settings from the process environment, reading `.env` first.
    pub fn from_env() -> Result<Self> {
        dotenv().ok();
        let settings = Self::from_lookup(|key| env::var(key).ok())?;
        info!("Loaded settings: {:?}", settings);
        Ok(settings)
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Self::default();

        if let Some(path) = lookup("ROUTE_REQUEST_PATH") {
            settings.request_path = PathBuf::from(path);
        }

        if let Some(path) = lookup("ROUTE_OUTPUT_CSV") {
            settings.output_csv = if path.trim().is_empty() {
                debug!("ROUTE_OUTPUT_CSV is empty, CSV output disabled");
                None
            } else {
                Some(PathBuf::from(path))
            };
        }

        if let Some(value) = lookup("ROUTE_TRIM_CLOSING") {
            settings.trim_closing = parse_flag("ROUTE_TRIM_CLOSING", &value)?;
        }

        if let Some(value) = lookup("ROUTE_NEAREST_FIRST") {
            settings.nearest_first = Some(parse_flag("ROUTE_NEAREST_FIRST", &value)?);
        }

        if let Some(value) = lookup("ROUTE_DEMO_STOPS") {
            let stops = value.trim().parse::<usize>().map_err(|_| {
                Error::invalid_config(format!("ROUTE_DEMO_STOPS must be a number, got '{value}'"))
            })?;
            if stops > MAX_NEAREST_FIRST_STOPS {
                return Err(Error::invalid_config(format!(
                    "ROUTE_DEMO_STOPS must be at most {MAX_NEAREST_FIRST_STOPS}, got {stops}"
                )));
            }
            settings.demo_stops = Some(stops);
        }

        Ok(settings)
    }
}

fn parse_flag(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(Error::invalid_config(format!(
            "{key} must be true or false, got '{other}'"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let settings = Settings::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.request_path, PathBuf::from("route_request.json"));
        assert_eq!(
            settings.output_csv,
            Some(PathBuf::from("optimized_route.csv"))
        );
    }

    #[test]
    fn reads_every_key() {
        let settings = Settings::from_lookup(lookup_from(&[
            ("ROUTE_REQUEST_PATH", "trip.json"),
            ("ROUTE_OUTPUT_CSV", "out.csv"),
            ("ROUTE_TRIM_CLOSING", "yes"),
            ("ROUTE_NEAREST_FIRST", "0"),
            ("ROUTE_DEMO_STOPS", " 6 "),
        ]))
        .unwrap();

        assert_eq!(settings.request_path, PathBuf::from("trip.json"));
        assert_eq!(settings.output_csv, Some(PathBuf::from("out.csv")));
        assert!(settings.trim_closing);
        assert_eq!(settings.nearest_first, Some(false));
        assert_eq!(settings.demo_stops, Some(6));
    }

    #[test]
    fn empty_output_path_disables_csv() {
        let settings = Settings::from_lookup(lookup_from(&[("ROUTE_OUTPUT_CSV", "  ")])).unwrap();
        assert_eq!(settings.output_csv, None);
    }

    #[test]
    fn rejects_bad_values() {
        let err = Settings::from_lookup(lookup_from(&[("ROUTE_TRIM_CLOSING", "maybe")]))
            .unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));

        let err =
            Settings::from_lookup(lookup_from(&[("ROUTE_DEMO_STOPS", "many")])).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn demo_stops_are_bounded() {
        let settings = Settings::from_lookup(lookup_from(&[("ROUTE_DEMO_STOPS", "9")])).unwrap();
        assert_eq!(settings.demo_stops, Some(9));

        let err =
            Settings::from_lookup(lookup_from(&[("ROUTE_DEMO_STOPS", "500")])).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
        assert!(err.to_string().contains("at most 9"));
    }
}
