use std::sync::Arc;

use actix_web::{App, HttpServer, web};
use anyhow::Context;
use tracing::info;

use redlink::api::{link_routes, redirect_routes};
use redlink::config;
use redlink::services::{ID_LENGTH, IdGenerator, LinkService};
use redlink::storage::StorageFactory;
use redlink::system::init_logging;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    config::init_config();
    let app_config = config::get_config();

    // Guard must stay alive so buffered log lines are flushed on exit
    let _log_guard = init_logging(&app_config);

    let storage = StorageFactory::create()
        .await
        .context("failed to initialize storage backend")?;
    info!("Using storage backend: {}", storage.backend_name());

    let service = Arc::new(LinkService::new(
        storage,
        Arc::new(IdGenerator::new(ID_LENGTH)),
    ));

    let bind_address = format!("{}:{}", app_config.server.host, app_config.server.port);
    info!("Starting server at http://{}", bind_address);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(service.clone()))
            .configure(link_routes)
            .configure(redirect_routes)
    })
    .workers(app_config.server.workers)
    .bind(&bind_address)
    .with_context(|| format!("failed to bind {}", bind_address))?
    .run()
    .await?;

    Ok(())
}
