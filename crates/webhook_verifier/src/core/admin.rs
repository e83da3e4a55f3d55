use error_stack::{report, ResultExt};

use crate::{
    core::errors::{self, RouterResponse, StorageErrorExt},
    db::MerchantConnectorAccountInterface,
    routes::AppState,
    services::ApplicationResponse,
    types::{api, storage},
};

/// Creates a connector account for the merchant. The connector must be one
/// of the supported integrations; the account's connector name is stored in
/// its canonical lowercase form.
pub async fn create_connector(
    state: &AppState,
    merchant_id: &str,
    request: api::MerchantConnectorCreate,
) -> RouterResponse<api::MerchantConnectorResponse> {
    let connector: api::Connector = request
        .connector_name
        .parse()
        .map_err(|_| report!(errors::ApiErrorResponse::IncorrectConnectorNameGiven))?;

    let account = state
        .store
        .insert_merchant_connector_account(storage::MerchantConnectorAccountNew {
            merchant_id: Some(merchant_id.to_string()),
            connector_name: Some(connector.to_string()),
            connector_webhook_details: request.connector_webhook_details,
            metadata: request.metadata,
            disabled: request.disabled,
        })
        .await
        .to_duplicate_response(errors::ApiErrorResponse::DuplicateMerchantConnectorAccount {
            connector: connector.to_string(),
        })?;

    Ok(ApplicationResponse::Json(account.into()))
}

pub async fn retrieve_connector(
    state: &AppState,
    merchant_id: &str,
    merchant_connector_id: i32,
) -> RouterResponse<api::MerchantConnectorResponse> {
    let account = state
        .store
        .find_merchant_connector_account_by_merchant_id_merchant_connector_id(
            merchant_id,
            merchant_connector_id,
        )
        .await
        .to_not_found_response(errors::ApiErrorResponse::MerchantConnectorAccountNotFound)?;

    Ok(ApplicationResponse::Json(account.into()))
}

pub async fn list_connectors(
    state: &AppState,
    merchant_id: &str,
) -> RouterResponse<Vec<api::MerchantConnectorResponse>> {
    let accounts = state
        .store
        .list_merchant_connector_accounts_by_merchant_id(merchant_id)
        .await
        .change_context(errors::ApiErrorResponse::InternalServerError)?;

    Ok(ApplicationResponse::Json(
        accounts.into_iter().map(Into::into).collect(),
    ))
}

pub async fn delete_connector(
    state: &AppState,
    merchant_id: &str,
    merchant_connector_id: i32,
) -> RouterResponse<api::MerchantConnectorDeleteResponse> {
    let deleted = state
        .store
        .delete_merchant_connector_account_by_merchant_id_merchant_connector_id(
            merchant_id,
            merchant_connector_id,
        )
        .await
        .to_not_found_response(errors::ApiErrorResponse::MerchantConnectorAccountNotFound)?;

    Ok(ApplicationResponse::Json(
        api::MerchantConnectorDeleteResponse {
            merchant_id: merchant_id.to_string(),
            merchant_connector_id,
            deleted,
        },
    ))
}
