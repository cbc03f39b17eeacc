use serde::{Deserialize, Serialize};
use std::fmt;

use super::models::DEFAULT_MODEL;

#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Json,
    Html,
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportFormat::Json => write!(f, "json"),
            ReportFormat::Html => write!(f, "html"),
        }
    }
}

/// Query string of `GET /api/latest-report/{route_id}`.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct ReportQuery {
    pub model: String,
    pub fmt: ReportFormat,
}

impl ReportQuery {
    pub fn new(model: Option<&str>, fmt: ReportFormat) -> Self {
        Self {
            model: model.unwrap_or(DEFAULT_MODEL).to_string(),
            fmt,
        }
    }
}
