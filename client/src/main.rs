use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use wx_client::{ApiClient, Config};

mod cli;
mod commands;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    env_logger::init();

    let args = Cli::parse();

    if let Err(err) = run(args).await {
        log::error!("{:#}", err);
        std::process::exit(1);
    }
}

async fn run(args: Cli) -> Result<()> {
    let config = Config::from_env()?;
    let api_url = args.api_url.unwrap_or(config.api_url);
    let api = ApiClient::new(&api_url)?;

    log::debug!("Using backend at {}", api.base_url());

    match args.cmd {
        Command::Health => commands::health(&api).await,
        Command::Routes => commands::routes(&api).await,
        Command::Report(report_args) => commands::report(&api, report_args, &config.model).await,
        Command::Gribs => commands::gribs(&api).await,
        Command::Overview => commands::overview(&api).await,
    }
}
