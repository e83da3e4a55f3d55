use error_stack::ResultExt;

use crate::{
    connector::utils,
    core::errors::{self, CustomResult},
    headers,
    types::api,
};

#[derive(Debug, Clone)]
pub struct Checkout;

impl api::IncomingWebhook for Checkout {
    /// The signature header carries the hex-encoded HMAC-SHA-256 of the raw
    /// event body.
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

    use super::Checkout;
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
        let body = br#"{"type":"payment_approved"}"#;
        let headers = signature_header("cko_secret", body);
        let request = IncomingWebhookRequestDetails {
            headers: &headers,
            body,
        };

        let verified = Checkout
            .verify_webhook_source(&request, &secrets("cko_secret"))
            .expect("verification outcome");
        assert!(verified);
    }

    #[test]
    fn verification_is_deterministic() {
        let body = br#"{"type":"payment_approved"}"#;
        let headers = signature_header("cko_secret", body);
        let request = IncomingWebhookRequestDetails {
            headers: &headers,
            body,
        };

        let first = Checkout
            .verify_webhook_source(&request, &secrets("cko_secret"))
            .expect("verification outcome");
        let second = Checkout
            .verify_webhook_source(&request, &secrets("cko_secret"))
            .expect("verification outcome");
        assert_eq!(first, second);
    }

    #[test]
    fn rejects_a_tampered_event() {
        let headers = signature_header("cko_secret", br#"{"type":"payment_approved"}"#);
        let request = IncomingWebhookRequestDetails {
            headers: &headers,
            body: br#"{"type":"payment_declined"}"#,
        };

        let verified = Checkout
            .verify_webhook_source(&request, &secrets("cko_secret"))
            .expect("verification outcome");
        assert!(!verified);
    }
}
