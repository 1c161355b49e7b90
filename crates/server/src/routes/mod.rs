use actix_web::web;

pub mod api;
pub mod page;
pub mod system;

/// Register all routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(page::index)
        .service(page::lookup)
        .service(api::lookup)
        .service(system::health);
}
