use actix_web::{web, HttpRequest, Responder};
use verifier_env::{instrument, tracing, Flow};

use super::app::AppState;
use crate::{core::admin, services::api, types::api::MerchantConnectorCreate};

#[instrument(skip_all, fields(flow = ?Flow::MerchantConnectorsCreate))]
pub async fn payment_connector_create(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<String>,
    json_payload: web::Json<MerchantConnectorCreate>,
) -> impl Responder {
    let merchant_id = path.into_inner();

    api::server_wrap(
        Flow::MerchantConnectorsCreate,
        state.get_ref(),
        &req,
        json_payload.into_inner(),
        |state, payload| admin::create_connector(state, &merchant_id, payload),
    )
    .await
}

#[instrument(skip_all, fields(flow = ?Flow::MerchantConnectorsRetrieve))]
pub async fn payment_connector_retrieve(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<(String, i32)>,
) -> impl Responder {
    let (merchant_id, merchant_connector_id) = path.into_inner();

    api::server_wrap(
        Flow::MerchantConnectorsRetrieve,
        state.get_ref(),
        &req,
        (),
        |state, _| admin::retrieve_connector(state, &merchant_id, merchant_connector_id),
    )
    .await
}

#[instrument(skip_all, fields(flow = ?Flow::MerchantConnectorsList))]
pub async fn payment_connector_list(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<String>,
) -> impl Responder {
    let merchant_id = path.into_inner();

    api::server_wrap(
        Flow::MerchantConnectorsList,
        state.get_ref(),
        &req,
        (),
        |state, _| admin::list_connectors(state, &merchant_id),
    )
    .await
}

#[instrument(skip_all, fields(flow = ?Flow::MerchantConnectorsDelete))]
pub async fn payment_connector_delete(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<(String, i32)>,
) -> impl Responder {
    let (merchant_id, merchant_connector_id) = path.into_inner();

    api::server_wrap(
        Flow::MerchantConnectorsDelete,
        state.get_ref(),
        &req,
        (),
        |state, _| admin::delete_connector(state, &merchant_id, merchant_connector_id),
    )
    .await
}
