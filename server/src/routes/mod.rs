use actix_web::{web, HttpResponse};

use errors::{Error, ErrorResponse};

pub mod games;
mod index;

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::PathConfig::default().error_handler(|err, _| {
        debug!("Rejected path - {}", err);
        Error::NotFound("Not Found".into()).into()
    }))
    .route("/", web::get().to(index::index))
    .service(
        web::scope("/games")
            .route("", web::get().to(games::get_all))
            .route("/users/{id}", web::get().to(games::get_users))
            .route("/{id}", web::get().to(games::get_one)),
    );
}

pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::from("Not Found"))
}
