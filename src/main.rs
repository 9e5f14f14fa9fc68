use actix_cors::Cors;
use actix_web::middleware::NormalizePath;
use actix_web::web::Data;
use actix_web::{App, HttpServer};
use dotenvy::dotenv;

use absensi_server::config::Config;
use absensi_server::db::{ensure_schema, init_db, seed_admin};
use absensi_server::routes;

use tracing::info;
use tracing_appender::rolling;

fn build_cors(allowed_origin: &str) -> Cors {
    if allowed_origin == "*" {
        Cors::permissive()
    } else {
        Cors::default()
            .allowed_origin(allowed_origin)
            .allow_any_method()
            .allow_any_header()
    }
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let config = Config::from_env();

    // Rolling daily log
    let file_appender = rolling::daily("logs", "app.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_target(false)
        .with_level(true)
        .init();

    info!("Server starting...");

    let pool = init_db(&config.database_url).await?;

    // Schema and admin seed run to completion before the listener binds,
    // so the first inbound request never races the seed.
    ensure_schema(&pool).await?;
    seed_admin(&pool).await?;

    let server_addr = config.server_addr.clone();
    let cors_origin = config.cors_allowed_origin.clone();

    info!(addr = %server_addr, "Listening");

    HttpServer::new(move || {
        App::new()
            .wrap(actix_web::middleware::Logger::default())
            .wrap(NormalizePath::trim())
            .wrap(build_cors(&cors_origin))
            .app_data(Data::new(pool.clone()))
            .configure(routes::configure)
    })
    .bind(server_addr)?
    .run()
    .await?;

    Ok(())
}
