use std::collections::HashMap;

use error_stack::ResultExt;

use crate::{
    connector::utils,
    core::errors::{self, CustomResult},
    headers,
    types::api,
};

#[derive(Debug, Clone)]
pub struct Stripe;

/// The signature header carries comma-separated `key=value` elements, e.g.
/// `t=1700000000,v1=5257a86...`.
fn get_signature_elements_from_header(
    headers: &actix_web::http::header::HeaderMap,
) -> CustomResult<HashMap<String, Vec<u8>>, errors::ConnectorError> {
    let security_header = utils::get_header_key_value(headers::X_WEBHOOK_SIGNATURE, headers)?;
    let header_parts = security_header.split(',').collect::<Vec<&str>>();
    let mut header_hashmap: HashMap<String, Vec<u8>> = HashMap::with_capacity(header_parts.len());

    for header_part in header_parts {
        let (header_key, header_value) = header_part
            .split_once('=')
            .ok_or(errors::ConnectorError::WebhookSignatureNotFound)?;
        header_hashmap.insert(header_key.trim().to_string(), header_value.bytes().collect());
    }

    Ok(header_hashmap)
}

impl api::IncomingWebhook for Stripe {
    fn get_webhook_source_verification_signature(
        &self,
        request: &api::IncomingWebhookRequestDetails<'_>,
        _connector_webhook_secrets: &api::ConnectorWebhookSecrets,
    ) -> CustomResult<Vec<u8>, errors::ConnectorError> {
        let mut header_elements = get_signature_elements_from_header(request.headers)?;
        let signature = header_elements
            .remove("v1")
            .ok_or(errors::ConnectorError::WebhookSignatureNotFound)?;
        hex::decode(signature).change_context(errors::ConnectorError::WebhookSignatureNotFound)
    }

    fn get_webhook_source_verification_message(
        &self,
        request: &api::IncomingWebhookRequestDetails<'_>,
        _connector_webhook_secrets: &api::ConnectorWebhookSecrets,
    ) -> CustomResult<Vec<u8>, errors::ConnectorError> {
        let mut header_elements = get_signature_elements_from_header(request.headers)?;
        let timestamp = header_elements
            .remove("t")
            .ok_or(errors::ConnectorError::WebhookSignatureNotFound)?;
        Ok(format!(
            "{}.{}",
            String::from_utf8_lossy(&timestamp),
            String::from_utf8_lossy(request.body)
        )
        .into_bytes())
    }
}
