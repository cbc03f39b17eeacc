pub mod api;
pub mod config;
pub mod display;

pub use api::ApiClient;
pub use config::Config;
