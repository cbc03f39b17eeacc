//! Plain text rendering used by the `wx` command.

use shared::{GribFile, HealthResponse, Route};

pub fn health_line(health: &HealthResponse) -> String {
    format!("backend status: {}", health.status)
}

pub fn route_line(route: &Route) -> String {
    let mut line = format!(
        "{:<24} {} ({} waypoints)",
        route.id,
        route.name,
        route.waypoints.len()
    );
    if let Some(description) = &route.description {
        line.push_str(&format!("\n{:<24} {}", "", description));
    }
    line
}

pub fn grib_line(file: &GribFile) -> String {
    let model = file.model.as_deref().unwrap_or("-");
    let hour = file
        .forecast_hour
        .map(|h| format!("f{:03}", h))
        .unwrap_or_else(|| "-".to_string());
    let modified = file
        .modified_time()
        .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| file.modified.clone());

    format!(
        "{:<32} {:<6} {:<5} {:>10}  {}",
        file.name,
        model,
        hour,
        human_size(file.size),
        modified
    )
}

/// Size in bytes, scaled to the largest unit under 1024.
pub fn human_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];
    let mut size = bytes as f64;
    let mut unit = 0;
    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{} B", bytes)
    } else {
        format!("{:.1} {}", size, UNITS[unit])
    }
}
