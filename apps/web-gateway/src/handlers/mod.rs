//! HTML handlers and route configuration.

mod pages;

use actix_web::web;

/// Configure all gateway routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(pages::index))
        .service(
            web::resource("/create")
                .route(web::get().to(pages::create_form))
                .route(web::post().to(pages::create_submit)),
        )
        .service(
            web::resource("/edit/{id}")
                .route(web::get().to(pages::edit_form))
                .route(web::post().to(pages::edit_submit)),
        )
        .service(
            web::resource("/delete/{id}")
                .route(web::get().to(pages::delete_confirm))
                .route(web::post().to(pages::delete_submit)),
        );
}
