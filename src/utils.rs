/// Human-readable cost; unavailable edges print as `unreachable`.
pub fn format_distance(distance: f64) -> String {
    if distance.is_infinite() && distance > 0.0 {
        "unreachable".to_string()
    } else {
        format!("{distance:.2}")
    }
}

pub fn format_route<W: AsRef<str>>(waypoints: &[W]) -> String {
    waypoints
        .iter()
        .map(|w| w.as_ref())
        .collect::<Vec<_>>()
        .join(" -> ")
}
