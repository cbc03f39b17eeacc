use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(about = "Marine weather routing CLI.")]
pub struct Cli {
    /// Backend URL, overrides WX_API_URL
    #[arg(short, long)]
    pub api_url: Option<String>,
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check the backend is up
    Health,
    /// List known routes
    Routes,
    /// Show the latest forecast report of a route
    Report(ReportArgs),
    /// List GRIB files available on the backend
    Gribs,
    /// Health, routes and GRIB files at once
    Overview,
}

#[derive(Debug, Parser)]
pub struct ReportArgs {
    pub route_id: String,
    /// Weather model (gfs, ecmwf), overrides WX_MODEL
    #[arg(short, long)]
    pub model: Option<String>,
    /// Print the HTML rendering instead of markdown
    #[arg(long)]
    pub html: bool,
}
