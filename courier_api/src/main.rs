mod app;
mod catalog;
mod config;
mod cost;
mod docs;
mod error;
mod health;
mod state;

use std::sync::Arc;

use axum::serve;
use courier_optimizer::{
    json::catalog_file::load_catalog, problem::builtin_catalog::builtin_catalog,
    solver::cost_engine::CostEngine,
};
use tracing::info;

use crate::{app::create_app, config::ApiConfig, state::AppState};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenvy::from_filename("./.env.local").ok();
    let config = ApiConfig::from_env()?;

    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .init();
    aide::generate::on_error(|error| tracing::error!("{}", error));
    aide::generate::extract_schemas(true);

    let catalog = match &config.catalog_path {
        Some(path) => load_catalog(path)?,
        None => {
            info!("using built-in catalog");
            builtin_catalog()?
        }
    };

    let engine = CostEngine::new(Arc::new(catalog)).with_strategy(config.search_strategy);
    let state = Arc::new(AppState { engine });

    let (app, api) = create_app(state, &config);

    if std::env::args().any(|a| a == "--generate-openapi") {
        std::fs::create_dir_all("schemas")?;
        std::fs::write("schemas/openapi.json", serde_json::to_string_pretty(&*api)?)?;
        info!("OpenAPI specification has been written to schemas/openapi.json");
        return Ok(());
    }

    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
    info!(
        address = %config.bind_address(),
        search = %config.search_strategy,
        "delivery cost API listening"
    );

    serve(listener, app).await?;

    Ok(())
}
