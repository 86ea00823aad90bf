use crate::core::service::ClassifierService;
use crate::http::handlers;
use actix_cors::Cors;
use actix_web::dev::Server;
use actix_web::{web, App, HttpServer};
use std::net::TcpListener;

/// Any origin, method and header; `*` in the allow-origin header.
pub fn cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allow_any_method()
        .allow_any_header()
        .send_wildcard()
}

/// 請求 body 上限，超過時回 400 而不是 413
pub const MAX_BODY_BYTES: usize = 16 * 1024 * 1024;

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/classify")
            .app_data(web::PayloadConfig::new(MAX_BODY_BYTES))
            .route(web::post().to(handlers::classify)),
    );
}

/// Build the server on an already bound listener. The model must be loaded by now.
pub fn build_server(listener: TcpListener, service: ClassifierService) -> std::io::Result<Server> {
    let data = web::Data::new(service);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(cors())
            .app_data(data.clone())
            .configure(routes)
    })
    .listen(listener)?
    .run();

    Ok(server)
}
