use actix_web::{web, HttpRequest, Responder};
use verifier_env::{instrument, tracing, Flow};

use super::app::AppState;
use crate::{core::webhooks, services::api, types::api::WebhookVerificationQuery};

#[instrument(skip_all, fields(flow = ?Flow::IncomingWebhookVerify))]
pub async fn verify_incoming_webhook(
    state: web::Data<AppState>,
    req: HttpRequest,
    body: web::Bytes,
    query: web::Query<WebhookVerificationQuery>,
) -> impl Responder {
    let query = query.into_inner();

    api::server_wrap(
        Flow::IncomingWebhookVerify,
        state.get_ref(),
        &req,
        body,
        |state, body| {
            webhooks::verify_webhook_source_core(
                state,
                &req,
                body,
                &query.connector,
                query.merchant_id.as_deref(),
            )
        },
    )
    .await
}
