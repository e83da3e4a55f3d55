#![forbid(unsafe_code)]
#![recursion_limit = "256"]

pub mod configs;
pub mod connector;
pub mod core;
pub mod db;
pub mod env;
pub mod routes;
pub mod services;
pub mod types;

use actix_web::{
    body::MessageBody,
    dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse},
    App,
};
use routes::AppState;

pub use self::env::logger;
use crate::{
    configs::settings::Settings,
    core::errors::{ApplicationError, ApplicationResult},
};

/// Header Constants
pub mod headers {
    pub const CONTENT_TYPE: &str = "Content-Type";
    pub const X_WEBHOOK_SIGNATURE: &str = "X-Webhook-Signature";
}

/// Assembles the application with all route groups mounted.
pub fn mk_app(
    state: AppState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .wrap(verifier_env::tracing_actix_web::TracingLogger::default())
        .service(routes::Webhooks::server(state.clone()))
        .service(routes::MerchantConnectorAccount::server(state.clone()))
        .service(routes::Health::server(state))
}

/// Binds the HTTP server and returns it without awaiting completion, so the
/// caller keeps control over shutdown.
pub async fn start_server(conf: Settings) -> ApplicationResult<Server> {
    logger::debug!(startup_config=?conf);

    let server_config = conf.server.clone();
    let state = AppState::new(conf).await;

    let server = actix_web::HttpServer::new(move || mk_app(state.clone()))
        .bind((server_config.host.as_str(), server_config.port))
        .map_err(ApplicationError::from)?
        .run();

    Ok(server)
}
