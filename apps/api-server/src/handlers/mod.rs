//! HTTP handlers and route configuration.

mod events;
mod health;
mod news;
mod programs;
mod stats;
mod uploads;

use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            // Public routes
            .route("/health", web::get().to(health::health_check))
            .route("/core/stats", web::get().to(stats::site_stats))
            .service(
                web::scope("/programs")
                    .route("", web::post().to(programs::create))
                    .route("", web::get().to(programs::list))
                    .route("/featured", web::get().to(programs::featured))
                    .route("/{id}", web::get().to(programs::get))
                    .route("/{id}", web::put().to(programs::update))
                    .route("/{id}", web::delete().to(programs::delete)),
            )
            .service(
                web::scope("/events")
                    .route("", web::post().to(events::create))
                    .route("", web::get().to(events::list))
                    .route("/upcoming", web::get().to(events::upcoming))
                    .route("/board", web::get().to(events::board))
                    .route("/{id}", web::get().to(events::get))
                    .route("/{id}", web::put().to(events::update))
                    .route("/{id}", web::delete().to(events::delete)),
            )
            .service(
                web::scope("/news")
                    .route("", web::post().to(news::create))
                    .route("", web::get().to(news::list))
                    .route("/latest", web::get().to(news::latest))
                    .route("/featured", web::get().to(news::featured))
                    .route("/{id}", web::get().to(news::get))
                    .route("/{id}", web::put().to(news::update))
                    .route("/{id}", web::delete().to(news::delete)),
            )
            .service(
                web::scope("/uploads")
                    .route("/image", web::post().to(uploads::upload_image))
                    .route("/{filename}", web::delete().to(uploads::delete_image)),
            ),
    );
}
