use actix_web::{web, Scope};

use super::{admin, health, webhooks};
use crate::{
    configs::settings::{FallbackWebhookSecrets, Settings},
    db::{MockDb, StorageInterface},
};

/// Shared application state handed to every route handler.
#[derive(Clone)]
pub struct AppState {
    pub store: Box<dyn StorageInterface>,
    pub conf: Settings,
    pub fallback_secrets: FallbackWebhookSecrets,
}

impl AppState {
    /// Builds the state from explicitly provided storage and fallback
    /// secrets. Tests use this to stay independent of the process
    /// environment.
    pub fn with_storage(
        conf: Settings,
        store: Box<dyn StorageInterface>,
        fallback_secrets: FallbackWebhookSecrets,
    ) -> Self {
        Self {
            store,
            conf,
            fallback_secrets,
        }
    }

    /// Builds the state with the in-memory store, capturing fallback
    /// secrets from the process environment once.
    pub async fn new(conf: Settings) -> Self {
        Self::with_storage(
            conf,
            Box::new(MockDb::new()),
            FallbackWebhookSecrets::from_env(),
        )
    }
}

pub struct Health;

impl Health {
    pub fn server(state: AppState) -> Scope {
        web::scope("")
            .app_data(web::Data::new(state))
            .service(web::resource("/health").route(web::get().to(health::health)))
    }
}

pub struct Webhooks;

impl Webhooks {
    pub fn server(state: AppState) -> Scope {
        web::scope("/api/webhooks")
            .app_data(web::Data::new(state))
            .service(
                web::resource("/verify").route(web::post().to(webhooks::verify_incoming_webhook)),
            )
    }
}

pub struct MerchantConnectorAccount;

impl MerchantConnectorAccount {
    pub fn server(state: AppState) -> Scope {
        web::scope("/account")
            .app_data(web::Data::new(state))
            .service(
                web::resource("/{merchant_id}/connectors")
                    .route(web::post().to(admin::payment_connector_create))
                    .route(web::get().to(admin::payment_connector_list)),
            )
            .service(
                web::resource("/{merchant_id}/connectors/{merchant_connector_id}")
                    .route(web::get().to(admin::payment_connector_retrieve))
                    .route(web::delete().to(admin::payment_connector_delete)),
            )
    }
}
