pub mod messages;
pub mod models;

pub use messages::{ReportFormat, ReportQuery};
pub use models::*;
