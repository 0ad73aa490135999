// Route exports
pub mod pages;
pub mod pairing;

use actix_web::web;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(pairing::configure);
}
