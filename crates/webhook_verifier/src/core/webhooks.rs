use actix_web::{web, HttpRequest};
use common_utils::ext_traits::ValueExt;
use error_stack::report;
use masking::ExposeInterface;

use crate::{
    configs::settings::FallbackWebhookSecrets,
    core::errors::{self, RouterResponse},
    db::{MerchantConnectorAccountInterface, StorageInterface},
    headers, logger,
    routes::AppState,
    services::ApplicationResponse,
    types::api,
};

/// Resolves the webhook secrets for a `(connector, merchant)` pair, trying
/// progressively less specific sources:
///
/// 1. the matching connector account's `connector_webhook_details`,
/// 2. that account's generic `metadata` `webhook_secret` entry,
/// 3. the process-wide fallback captured at startup.
///
/// Without a merchant identifier the account lookup is skipped entirely;
/// one merchant's secret must never verify another merchant's webhook.
/// Storage failures are logged and treated the same as a missing account;
/// resolution itself never fails.
pub async fn get_webhook_source_verification_secrets(
    store: &dyn StorageInterface,
    fallback_secrets: &FallbackWebhookSecrets,
    connector_name: &str,
    merchant_id: Option<&str>,
) -> api::ConnectorWebhookSecrets {
    let environment_fallback = || api::ConnectorWebhookSecrets {
        webhook_secret: fallback_secrets.get(connector_name),
        merchant_secret: None,
    };

    let merchant_id = match merchant_id.filter(|merchant_id| !merchant_id.is_empty()) {
        Some(merchant_id) => merchant_id,
        None => {
            logger::warn!(
                connector_name,
                "merchant id missing from webhook verification request, skipping account lookup"
            );
            return environment_fallback();
        }
    };

    let accounts = match store
        .list_merchant_connector_accounts_by_merchant_id(merchant_id)
        .await
    {
        Ok(accounts) => accounts,
        Err(error) => {
            logger::warn!(
                ?error,
                merchant_id,
                connector_name,
                "connector account lookup failed, falling back to environment secret"
            );
            return environment_fallback();
        }
    };

    let Some(account) = accounts
        .into_iter()
        .find(|account| account.connector_name.eq_ignore_ascii_case(connector_name))
    else {
        return environment_fallback();
    };

    if let Some(details) = account.connector_webhook_details {
        match ValueExt::<api::MerchantConnectorWebhookDetails>::parse_value(
            details.expose(),
            "MerchantConnectorWebhookDetails",
        ) {
            Ok(details) => {
                let secrets = api::ConnectorWebhookSecrets {
                    webhook_secret: details.webhook_secret,
                    merchant_secret: details.merchant_secret,
                };
                if !secrets.is_empty() {
                    return secrets;
                }
            }
            Err(error) => {
                logger::warn!(
                    ?error,
                    merchant_id,
                    connector_name,
                    "malformed connector webhook details"
                );
            }
        }
    }

    if let Some(metadata) = account.metadata {
        let metadata = metadata.expose();
        if let Some(webhook_secret) = metadata
            .get("webhook_secret")
            .and_then(serde_json::Value::as_str)
        {
            return api::ConnectorWebhookSecrets {
                webhook_secret: Some(masking::Secret::new(webhook_secret.to_string())),
                merchant_secret: None,
            };
        }
    }

    environment_fallback()
}

/// Orchestrates credential resolution and signature verification for one
/// inbound verification call.
///
/// A missing secret and an unsupported connector surface as structured
/// 400 responses; a failed or errored signature check is a normal outcome
/// reported with `verified: false`. Nothing in this flow produces a 5xx.
pub async fn verify_webhook_source_core(
    state: &AppState,
    req: &HttpRequest,
    body: web::Bytes,
    connector_name: &str,
    merchant_id: Option<&str>,
) -> RouterResponse<api::WebhookVerificationResponse> {
    if !req.headers().contains_key(headers::X_WEBHOOK_SIGNATURE) {
        return Err(report!(errors::ApiErrorResponse::MissingRequiredField {
            field_name: headers::X_WEBHOOK_SIGNATURE,
        }));
    }

    let connector: api::Connector = connector_name.parse().map_err(|_| {
        report!(errors::ApiErrorResponse::WebhookProcessingFailure {
            connector: connector_name.to_string(),
            reason: format!("unsupported connector: {connector_name}"),
        })
    })?;

    let connector_webhook_secrets = get_webhook_source_verification_secrets(
        state.store.as_ref(),
        &state.fallback_secrets,
        connector_name,
        merchant_id,
    )
    .await;

    if connector_webhook_secrets.webhook_secret.is_none() {
        return Err(report!(errors::ApiErrorResponse::WebhookSecretNotFound {
            connector: connector.to_string(),
        }));
    }

    let request_details = api::IncomingWebhookRequestDetails {
        headers: req.headers(),
        body: &body,
    };

    let verified = match connector
        .verifier()
        .verify_webhook_source(&request_details, &connector_webhook_secrets)
    {
        Ok(verified) => verified,
        Err(error) => {
            logger::warn!(?error, connector_name, "webhook source verification errored");
            false
        }
    };

    Ok(ApplicationResponse::Json(api::WebhookVerificationResponse {
        verified,
        connector: connector.to_string(),
        error: (!verified).then(|| "Signature verification failed".to_string()),
    }))
}
