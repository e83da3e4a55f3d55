use base64::Engine;
use common_utils::consts;
use error_stack::ResultExt;

use crate::{
    connector::utils,
    core::errors::{self, CustomResult},
    headers,
    types::api,
};

#[derive(Debug, Clone)]
pub struct Adyen;

impl api::IncomingWebhook for Adyen {
    /// The signature header carries the base64-encoded HMAC-SHA-256 of the
    /// raw notification body.
    fn get_webhook_source_verification_signature(
        &self,
        request: &api::IncomingWebhookRequestDetails<'_>,
        _connector_webhook_secrets: &api::ConnectorWebhookSecrets,
    ) -> CustomResult<Vec<u8>, errors::ConnectorError> {
        let base64_signature =
            utils::get_header_key_value(headers::X_WEBHOOK_SIGNATURE, request.headers)?;
        consts::BASE64_ENGINE
            .decode(base64_signature)
            .change_context(errors::ConnectorError::WebhookSignatureNotFound)
    }
}
