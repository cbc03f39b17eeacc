use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Weather model used when the caller doesn't pick one.
pub const DEFAULT_MODEL: &str = "gfs";

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Waypoint {
    pub lat: f64,
    pub lon: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Route {
    pub id: String,
    pub name: String,
    pub waypoints: Vec<Waypoint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// One sample of the forecast along a route.
///
/// The backend may attach more fields than the ones known here (local time,
/// gusts, per-model columns...). They are kept as-is in `extra`.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct TimelinePoint {
    pub time: String,
    pub lat: f64,
    pub lon: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wind_speed: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wind_dir: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wave_height: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hazards: Option<Vec<String>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TimelinePoint {
    pub fn parsed_time(&self) -> Option<DateTime<FixedOffset>> {
        parse_timestamp(&self.time)
    }
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct ForecastReport {
    pub route: String,
    pub model: String,
    pub departure: String,
    pub track: Vec<TimelinePoint>,
    pub markdown: String,
    pub html: String,
}

impl ForecastReport {
    pub fn departure_time(&self) -> Option<DateTime<FixedOffset>> {
        parse_timestamp(&self.departure)
    }
}

/// Metadata of a GRIB file stored by the backend. Size is in bytes.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct GribFile {
    pub name: String,
    pub path: String,
    pub size: u64,
    pub modified: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forecast_hour: Option<u32>,
}

impl GribFile {
    pub fn modified_time(&self) -> Option<DateTime<FixedOffset>> {
        parse_timestamp(&self.modified)
    }
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct HealthResponse {
    pub status: String,
}

impl HealthResponse {
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}

fn parse_timestamp(raw: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(raw).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_route_with_named_waypoints() {
        let route: Route = serde_json::from_value(json!({
            "id": "lakecharles-kemah",
            "name": "Lake Charles to Kemah",
            "description": "Bord du Lac Marina to Kemah Boardwalk Marina",
            "waypoints": [
                {"name": "Bord du Lac Marina", "lat": 30.2247, "lon": -93.2174},
                {"name": "Calcasieu Pass", "lat": 29.7681, "lon": -93.3432}
            ]
        }))
        .unwrap();

        assert_eq!(route.waypoints.len(), 2);
        assert_eq!(route.waypoints[1].name.as_deref(), Some("Calcasieu Pass"));
        assert_eq!(route.waypoints[0].lon, -93.2174);
    }

    #[test]
    fn test_route_bare_waypoints() {
        let route: Route = serde_json::from_value(json!({
            "id": "r1",
            "name": "Short hop",
            "waypoints": [{"lat": 1.5, "lon": 2.5}]
        }))
        .unwrap();

        assert_eq!(route.description, None);
        assert_eq!(route.waypoints[0].name, None);
        // Absent optionals stay absent on the way out
        let back = serde_json::to_value(&route).unwrap();
        assert_eq!(
            back,
            json!({"id": "r1", "name": "Short hop", "waypoints": [{"lat": 1.5, "lon": 2.5}]})
        );
    }

    #[test]
    fn test_timeline_point_keeps_unknown_fields() {
        let point: TimelinePoint = serde_json::from_value(json!({
            "time": "2024-01-01T06:00:00+00:00",
            "lat": 29.5,
            "lon": -94.0,
            "wind_speed": 14.2,
            "hazards": ["Small craft advisory"],
            "time_local": "2024-01-01T00:00:00-06:00",
            "gust": 21.0
        }))
        .unwrap();

        assert_eq!(point.wind_speed, Some(14.2));
        assert_eq!(point.wind_dir, None);
        assert_eq!(point.hazards.as_deref(), Some(&["Small craft advisory".to_string()][..]));
        assert_eq!(point.extra.len(), 2);
        assert_eq!(point.extra["gust"], json!(21.0));
        assert_eq!(point.extra["time_local"], json!("2024-01-01T00:00:00-06:00"));
        assert_eq!(point.parsed_time().unwrap().to_rfc3339(), "2024-01-01T06:00:00+00:00");
    }

    #[test]
    fn test_timeline_point_extra_serialized_inline() {
        let mut extra = Map::new();
        extra.insert("swell_period".to_string(), json!(8));
        let point = TimelinePoint {
            time: "2024-01-01T00:00:00Z".to_string(),
            lat: 1.0,
            lon: 2.0,
            wind_speed: None,
            wind_dir: Some(180.0),
            wave_height: None,
            score: Some("GO".to_string()),
            hazards: None,
            extra,
        };

        let value = serde_json::to_value(&point).unwrap();
        assert_eq!(
            value,
            json!({
                "time": "2024-01-01T00:00:00Z",
                "lat": 1.0,
                "lon": 2.0,
                "wind_dir": 180.0,
                "score": "GO",
                "swell_period": 8
            })
        );
    }

    #[test]
    fn test_parsed_timestamps() {
        let report = ForecastReport {
            route: "route-42".to_string(),
            model: DEFAULT_MODEL.to_string(),
            departure: "2024-01-01T00:00:00Z".to_string(),
            track: vec![],
            markdown: String::new(),
            html: String::new(),
        };
        assert_eq!(
            report.departure_time().unwrap().to_rfc3339(),
            "2024-01-01T00:00:00+00:00"
        );

        let grib = GribFile {
            name: "gfs.t00z.pgrb2.0p25.f003".to_string(),
            path: "data/grib/gfs.t00z.pgrb2.0p25.f003".to_string(),
            size: 1024,
            modified: "2024-01-01 03:00".to_string(),
            model: None,
            forecast_hour: None,
        };
        // Not RFC 3339
        assert!(grib.modified_time().is_none());
    }

    #[test]
    fn test_grib_file_optional_fields() {
        let grib: GribFile = serde_json::from_value(json!({
            "name": "ecmwf_012.grib2",
            "path": "data/grib/ecmwf_012.grib2",
            "size": 5242880,
            "modified": "2024-01-01T12:00:00+00:00",
            "model": "ecmwf",
            "forecast_hour": 12
        }))
        .unwrap();

        assert_eq!(grib.size, 5_242_880);
        assert_eq!(grib.model.as_deref(), Some("ecmwf"));
        assert_eq!(grib.forecast_hour, Some(12));
        assert!(grib.modified_time().is_some());
    }

    #[test]
    fn test_health_status() {
        let ok: HealthResponse = serde_json::from_str(r#"{"status":"ok"}"#).unwrap();
        assert!(ok.is_ok());

        let degraded: HealthResponse = serde_json::from_str(r#"{"status":"degraded"}"#).unwrap();
        assert!(!degraded.is_ok());
    }
}
