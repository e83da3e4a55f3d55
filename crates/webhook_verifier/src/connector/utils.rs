//! Helpers shared by connector webhook implementations.

use crate::core::errors::{self, CustomResult};

/// Reads a header value as UTF-8, treating an absent or unreadable header as
/// a missing signature.
pub fn get_header_key_value<'a>(
    key: &str,
    headers: &'a actix_web::http::header::HeaderMap,
) -> CustomResult<&'a str, errors::ConnectorError> {
    headers
        .get(key)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| errors::ConnectorError::WebhookSignatureNotFound.into())
}
