#[cfg(feature = "server")]
use actix_cors::Cors;
#[cfg(feature = "server")]
use actix_web::{App, HttpServer, middleware, web};

#[cfg(feature = "server")]
use crate::db::{establish_connection_pool, run_migrations};
#[cfg(feature = "server")]
use crate::models::config::ServerConfig;
#[cfg(feature = "server")]
use crate::repository::DieselRepository;

pub mod db;
pub mod domain;
#[cfg(feature = "server")]
pub mod dto;
#[cfg(feature = "server")]
pub mod forms;
pub mod models;
pub mod repository;
#[cfg(feature = "server")]
pub mod routes;
pub mod schema;
#[cfg(feature = "server")]
pub mod services;

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
#[cfg(feature = "server")]
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    // Establish Diesel connection pool for the SQLite database.
    let pool = establish_connection_pool(&server_config.database_url).map_err(|e| {
        std::io::Error::other(format!("Failed to establish database connection: {e}"))
    })?;

    run_migrations(&pool)
        .map_err(|e| std::io::Error::other(format!("Failed to prepare database: {e}")))?;

    let repo = DieselRepository::new(pool);

    let bind_address = (server_config.address.clone(), server_config.port);
    log::info!(
        "Starting teacher registry on {}:{}",
        bind_address.0,
        bind_address.1
    );

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(middleware::Logger::default())
            .configure(routes::configure)
            .app_data(web::Data::new(repo.clone()))
    })
    .bind(bind_address)?
    .run()
    .await
}
