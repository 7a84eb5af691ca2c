#![deny(warnings)]

use actix_cors::Cors;
use actix_web::web::Data;
use actix_web::{App, HttpServer};
use tracing_subscriber::EnvFilter;

use voting_api::config::{self, AppConfig, CorsConfig};
use voting_api::database::DatabasePool;
use voting_api::router;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = config::load()?;
    let pool = DatabasePool::connect(&config.database).await?;

    let result = serve(&config, pool.clone()).await;

    // runs on both the normal and the error exit path
    pool.shutdown().await;

    Ok(result?)
}

async fn serve(config: &AppConfig, pool: DatabasePool) -> std::io::Result<()> {
    ::tracing::info!(
        host = %config.server.host,
        port = config.server.port,
        environment = %config.app.environment,
        "starting voting-api"
    );

    let data = Data::new(pool);
    let cors_config = config.security.cors.clone();

    let mut server = HttpServer::new(move || {
        App::new()
            .wrap(cors(&cors_config))
            .app_data(data.clone())
            .configure(router::route)
    })
    .bind((config.server.host.as_str(), config.server.port))?
    .shutdown_timeout(config.app.shutdown_timeout);

    if let Some(workers) = config.server.workers {
        server = server.workers(workers);
    }

    server.run().await
}

/// CORS policy from the deployment allow-list; wide open when disabled.
fn cors(config: &CorsConfig) -> Cors {
    if !config.enabled {
        return Cors::permissive();
    }

    let mut cors = Cors::default().max_age(config.max_age as usize);

    if config.origins.iter().any(|origin| origin == "*") {
        cors = cors.allow_any_origin();
    } else {
        for origin in &config.origins {
            cors = cors.allowed_origin(origin);
        }
    }

    if config.methods.iter().any(|method| method == "*") {
        cors = cors.allow_any_method();
    } else {
        cors = cors.allowed_methods(config.methods.iter().map(String::as_str));
    }

    if config.headers.iter().any(|header| header == "*") {
        cors = cors.allow_any_header();
    } else {
        cors = cors.allowed_headers(config.headers.iter().map(String::as_str));
    }

    if config.allow_credentials {
        cors = cors.supports_credentials();
    }

    cors
}
