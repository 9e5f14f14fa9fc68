use crate::{api::attendance, auth::handlers};
use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig) {
    // A non-parseable {id} is a malformed request, not a missing resource;
    // the extractor's default would answer 404.
    cfg.app_data(
        web::PathConfig::default()
            .error_handler(|err, _req| actix_web::error::ErrorBadRequest(err)),
    );

    cfg.service(web::resource("/login").route(web::post().to(handlers::login)));

    cfg.service(
        web::resource("/absensi")
            .route(web::get().to(attendance::list_attendance))
            .route(web::post().to(attendance::create_attendance)),
    );

    cfg.service(
        web::resource("/absensi/{id}")
            .route(web::get().to(attendance::get_attendance))
            .route(web::put().to(attendance::update_attendance))
            .route(web::delete().to(attendance::delete_attendance)),
    );
}
