#[macro_use]
extern crate log;

use std::io;
use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{
    http,
    middleware::{Condition, Logger},
    web::{self, Data},
    App, HttpServer,
};
use dotenv::dotenv;

mod config;
mod handlers;
mod routes;
mod tests;

use crate::config::Config;
use crate::routes::{not_found, routes};
use db::repository::Storage;

fn cors(client_host: Option<&str>) -> Condition<Cors> {
    match client_host {
        Some(host) => Condition::new(
            true,
            Cors::default()
                .allowed_origin(host)
                .allowed_methods(vec!["GET"])
                .allowed_headers(vec![http::header::ACCEPT, http::header::CONTENT_TYPE])
                .max_age(3600),
        ),
        None => Condition::new(false, Cors::default()),
    }
}

#[actix_rt::main]
async fn main() -> io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let config = Config::from_env().map_err(|err| {
        error!("Invalid configuration - {}", err);
        io::Error::new(io::ErrorKind::InvalidInput, err.to_string())
    })?;

    let pool = db::new_pool(&config.database_url)
        .map_err(|err| io::Error::new(io::ErrorKind::Other, err.to_string()))?;
    let storage: Arc<dyn Storage> = Arc::new(pool);

    info!("Listening on {}", config.bind_address);

    let client_host = config.client_host.clone();
    HttpServer::new(move || {
        App::new()
            .wrap(cors(client_host.as_deref()))
            .wrap(Logger::default())
            .app_data(Data::from(storage.clone()))
            .configure(routes)
            .default_service(web::route().to(not_found))
    })
    .bind(&config.bind_address)?
    .run()
    .await
}
