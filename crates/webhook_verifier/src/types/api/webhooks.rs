use common_utils::crypto;
use error_stack::ResultExt;
use masking::{PeekInterface, Secret};

use crate::core::errors::{self, CustomResult};

/// Borrowed view over an inbound webhook request. The body is kept exactly
/// as received; connectors sign over raw bytes, so any re-encoding would
/// break verification.
#[derive(Debug)]
pub struct IncomingWebhookRequestDetails<'a> {
    pub headers: &'a actix_web::http::header::HeaderMap,
    pub body: &'a [u8],
}

/// Query parameters accepted by the verification endpoint.
#[derive(Debug, serde::Deserialize)]
pub struct WebhookVerificationQuery {
    pub connector: String,
    pub merchant_id: Option<String>,
}

/// Outcome of a verification call, reported to the caller as-is.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct WebhookVerificationResponse {
    pub verified: bool,
    pub connector: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Secret material resolved for verifying one connector webhook. Assembled
/// fresh per request and never persisted; an empty set is a valid outcome
/// meaning "no secret available".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConnectorWebhookSecrets {
    pub webhook_secret: Option<Secret<String>>,
    pub merchant_secret: Option<Secret<String>>,
}

impl ConnectorWebhookSecrets {
    /// Whether any credential was resolved from any source.
    pub fn is_empty(&self) -> bool {
        self.webhook_secret.is_none() && self.merchant_secret.is_none()
    }
}

/// Webhook verification capability of a connector integration.
///
/// Implementations describe how the connector transports its signature and
/// what exactly it signs; `verify_webhook_source` composes those pieces and
/// is rarely overridden.
pub trait IncomingWebhook: Send + Sync {
    fn get_webhook_source_verification_algorithm(
        &self,
        _request: &IncomingWebhookRequestDetails<'_>,
    ) -> CustomResult<Box<dyn crypto::VerifySignature + Send>, errors::ConnectorError> {
        Ok(Box::new(crypto::HmacSha256))
    }

    fn get_webhook_source_verification_signature(
        &self,
        request: &IncomingWebhookRequestDetails<'_>,
        connector_webhook_secrets: &ConnectorWebhookSecrets,
    ) -> CustomResult<Vec<u8>, errors::ConnectorError>;

    fn get_webhook_source_verification_message(
        &self,
        request: &IncomingWebhookRequestDetails<'_>,
        _connector_webhook_secrets: &ConnectorWebhookSecrets,
    ) -> CustomResult<Vec<u8>, errors::ConnectorError> {
        Ok(request.body.to_vec())
    }

    fn verify_webhook_source(
        &self,
        request: &IncomingWebhookRequestDetails<'_>,
        connector_webhook_secrets: &ConnectorWebhookSecrets,
    ) -> CustomResult<bool, errors::ConnectorError> {
        let algorithm = self
            .get_webhook_source_verification_algorithm(request)
            .change_context(errors::ConnectorError::WebhookSourceVerificationFailed)?;

        let signature = self
            .get_webhook_source_verification_signature(request, connector_webhook_secrets)
            .change_context(errors::ConnectorError::WebhookSourceVerificationFailed)?;

        let message = self
            .get_webhook_source_verification_message(request, connector_webhook_secrets)
            .change_context(errors::ConnectorError::WebhookSourceVerificationFailed)?;

        let secret = connector_webhook_secrets
            .webhook_secret
            .as_ref()
            .ok_or(errors::ConnectorError::WebhookVerificationSecretNotFound)?;

        algorithm
            .verify_signature(secret.peek().as_bytes(), &signature, &message)
            .change_context(errors::ConnectorError::WebhookSourceVerificationFailed)
    }
}
