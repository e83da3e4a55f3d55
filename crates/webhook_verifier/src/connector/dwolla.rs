use common_utils::crypto;
use error_stack::ResultExt;

use crate::{
    connector::utils,
    core::errors::{self, CustomResult},
    headers,
    types::api,
};

#[derive(Debug, Clone)]
pub struct Dwolla;

impl api::IncomingWebhook for Dwolla {
    fn get_webhook_source_verification_algorithm(
        &self,
        _request: &api::IncomingWebhookRequestDetails<'_>,
    ) -> CustomResult<Box<dyn crypto::VerifySignature + Send>, errors::ConnectorError> {
        Ok(Box::new(crypto::HmacSha256))
    }

    /// The signature header carries the hex-encoded HMAC-SHA-256 digest of
    /// the raw event payload.
    fn get_webhook_source_verification_signature(
        &self,
        request: &api::IncomingWebhookRequestDetails<'_>,
        _connector_webhook_secrets: &api::ConnectorWebhookSecrets,
    ) -> CustomResult<Vec<u8>, errors::ConnectorError> {
        let signature = utils::get_header_key_value(headers::X_WEBHOOK_SIGNATURE, request.headers)?;
        hex::decode(signature).change_context(errors::ConnectorError::WebhookSignatureNotFound)
    }
}

#[cfg(test)]
mod tests {
    use actix_web::http::header::{HeaderMap, HeaderName, HeaderValue};
    use common_utils::crypto::SignMessage;

    use super::Dwolla;
    use crate::types::api::{
        ConnectorWebhookSecrets, IncomingWebhook, IncomingWebhookRequestDetails,
    };

    fn signature_header(secret: &str, body: &[u8]) -> HeaderMap {
        let signature = common_utils::crypto::HmacSha256
            .sign_message(secret.as_bytes(), body)
            .expect("sign message");

        let mut headers = HeaderMap::new();
        headers.insert(
            HeaderName::from_static("x-webhook-signature"),
            HeaderValue::from_str(&hex::encode(signature)).expect("header value"),
        );
        headers
    }

    fn secrets(secret: &str) -> ConnectorWebhookSecrets {
        ConnectorWebhookSecrets {
            webhook_secret: Some(secret.to_string().into()),
            merchant_secret: None,
        }
    }

    #[test]
    fn verifies_a_correctly_signed_event() {
        let body = br#"{"topic":"transfer_completed"}"#;
        let headers = signature_header("dwolla_secret", body);
        let request = IncomingWebhookRequestDetails {
            headers: &headers,
            body,
        };

        let verified = Dwolla
            .verify_webhook_source(&request, &secrets("dwolla_secret"))
            .expect("verification outcome");
        assert!(verified);
    }

    #[test]
    fn rejects_a_single_flipped_byte() {
        let headers = signature_header("dwolla_secret", br#"{"topic":"transfer_completed"}"#);
        let request = IncomingWebhookRequestDetails {
            headers: &headers,
            body: br#"{"topic":"transfer_completee"}"#,
        };

        let verified = Dwolla
            .verify_webhook_source(&request, &secrets("dwolla_secret"))
            .expect("verification outcome");
        assert!(!verified);
    }

    #[test]
    fn errors_when_the_header_is_missing() {
        let headers = HeaderMap::new();
        let request = IncomingWebhookRequestDetails {
            headers: &headers,
            body: b"{}",
        };

        assert!(Dwolla
            .verify_webhook_source(&request, &secrets("dwolla_secret"))
            .is_err());
    }
}
