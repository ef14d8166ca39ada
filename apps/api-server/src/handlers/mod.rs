//! HTTP handlers and route configuration.

mod beers;
mod health;
mod posts;
mod products;
mod teas;
mod users;

use actix_web::web;

/// Configure all application routes.
///
/// Every resource is registered here explicitly: one scope per entity,
/// four verbs per scope. Adding an entity means adding its handler
/// module and wiring its scope below.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health::health_check))
        .service(
            web::scope("/users")
                .route("/", web::post().to(users::create))
                .route("/{id}", web::get().to(users::get))
                .route("/{id}", web::put().to(users::update))
                .route("/{id}", web::delete().to(users::delete)),
        )
        .service(
            web::scope("/posts")
                .route("/", web::post().to(posts::create))
                .route("/{id}", web::get().to(posts::get))
                .route("/{id}", web::put().to(posts::update))
                .route("/{id}", web::delete().to(posts::delete)),
        )
        .service(
            web::scope("/beers")
                .route("/", web::post().to(beers::create))
                .route("/{id}", web::get().to(beers::get))
                .route("/{id}", web::put().to(beers::update))
                .route("/{id}", web::delete().to(beers::delete)),
        )
        .service(
            web::scope("/teas")
                .route("/", web::post().to(teas::create))
                .route("/{id}", web::get().to(teas::get))
                .route("/{id}", web::put().to(teas::update))
                .route("/{id}", web::delete().to(teas::delete)),
        )
        .service(
            web::scope("/products")
                .route("/", web::post().to(products::create))
                .route("/{id}", web::get().to(products::get))
                .route("/{id}", web::put().to(products::update))
                .route("/{id}", web::delete().to(products::delete)),
        );
}
