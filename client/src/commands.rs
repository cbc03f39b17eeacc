use anyhow::Result;
use wx_client::{display, ApiClient};

use crate::cli::ReportArgs;

pub async fn health(api: &ApiClient) -> Result<()> {
    let health = api.get_health().await?;
    println!("{}", display::health_line(&health));
    if !health.is_ok() {
        log::warn!("Backend reported status {}", health.status);
    }
    Ok(())
}

pub async fn routes(api: &ApiClient) -> Result<()> {
    let routes = api.get_routes().await?;
    for route in &routes {
        println!("{}", display::route_line(route));
    }
    log::info!("{} routes", routes.len());
    Ok(())
}

pub async fn report(api: &ApiClient, args: ReportArgs, default_model: &str) -> Result<()> {
    let model = args.model.as_deref().unwrap_or(default_model);

    if args.html {
        let html = api.get_latest_report_html(&args.route_id, Some(model)).await?;
        println!("{}", html);
        return Ok(());
    }

    let report = api.get_latest_report(&args.route_id, Some(model)).await?;
    log::info!(
        "Report for {} ({}), departure {}, {} track points",
        report.route,
        report.model,
        report.departure,
        report.track.len()
    );
    println!("{}", report.markdown);
    Ok(())
}

pub async fn gribs(api: &ApiClient) -> Result<()> {
    let files = api.get_grib_files().await?;
    for file in &files {
        println!("{}", display::grib_line(file));
    }
    log::info!("{} GRIB files", files.len());
    Ok(())
}

pub async fn overview(api: &ApiClient) -> Result<()> {
    let (health, routes, files) =
        futures::try_join!(api.get_health(), api.get_routes(), api.get_grib_files())?;

    println!("{}", display::health_line(&health));
    println!();
    println!("Routes:");
    for route in &routes {
        println!("  {}", display::route_line(route));
    }
    println!();
    println!("GRIB files:");
    for file in &files {
        println!("  {}", display::grib_line(file));
    }
    let total: u64 = files.iter().map(|f| f.size).sum();
    println!("  {} files, {}", files.len(), display::human_size(total));
    Ok(())
}
