use actix_web::{App, HttpServer};
use router::{configs::settings::Settings, cors, logger, routes};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    #[allow(clippy::expect_used)]
    let conf = Settings::new().expect("Unable to construct application configuration");

    logger::setup(&conf.log);

    #[allow(clippy::expect_used)]
    let state = routes::AppState::new(conf.clone())
        .await
        .expect("Failed to construct application state");

    let server = conf.server.clone();
    logger::info!("Starting server on {}:{}", server.host, server.port);

    HttpServer::new(move || {
        App::new()
            .wrap(tracing_actix_web::TracingLogger::default())
            .wrap(cors::cors(state.conf.cors.clone()))
            .service(routes::Payments::server(state.clone()))
            .service(routes::Orders::server(state.clone()))
            .service(routes::Previews::server(state.clone()))
            .service(routes::Health::server(state.clone()))
    })
    .bind((server.host.as_str(), server.port))?
    .run()
    .await
}
