use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use actix_web::{web, App, HttpServer};
use anyhow::Result;
use clap::Parser;

mod config;
mod error;
mod geolocate;
mod hex;
mod provider;

#[derive(Debug, Parser)]
struct Cli {
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Overrides the configured HTTP port
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let path = match cli.config.as_deref() {
        Some(x) => x,
        None => Path::new("config.toml"),
    };
    let config = config::load(path)?;

    // a missing API key is fatal before the server ever binds
    let api_key = config.geolocation.api_key()?;
    let gateway = provider::Gateway::new(
        &config.geolocation.url,
        &api_key,
        Duration::from_secs(config.geolocation.timeout_secs),
    )?;
    let gateway = web::Data::new(gateway);

    let port = cli.port.unwrap_or(config.http_port);
    HttpServer::new(move || {
        App::new()
            .app_data(gateway.clone())
            .service(geolocate::health)
            .service(geolocate::service)
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await?;

    Ok(())
}
