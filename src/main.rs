use account_auth::config::{EnvConfig, CONFIG};
use account_auth::db::database_service::DatabaseService;
use account_auth::routes::configure_routes;
use actix_web::{middleware::Logger, web, App, HttpServer};
use std::io;
use std::sync::Arc;
use tracing::{error, info};

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = EnvConfig::from_env().map_err(|e| {
        error!("invalid configuration: {e}");
        io::Error::other(e)
    })?;
    let config = CONFIG.get_or_init(|| config);

    let database_service = Arc::new(
        DatabaseService::new(&config.db_url)
            .await
            .map_err(|e| {
                error!("failed to initialize database: {e}");
                io::Error::other(e)
            })?
    );

    info!("Starting server on {}", config.addr());

    let app_db = Arc::clone(&database_service);
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(Arc::clone(&app_db)))
            .configure(configure_routes)
    })
    .bind(config.addr())?
    .run()
    .await?;

    if let Err(e) = database_service.close().await {
        error!("failed to close database: {e}");
    }
    Ok(())
}
