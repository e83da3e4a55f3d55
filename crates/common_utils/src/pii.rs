//! Personal Identifiable Information protection.

use masking::Secret;

/// A JSON value which may carry secret material (connector credentials,
/// webhook secrets) and must therefore stay masked in logs.
pub type SecretSerdeValue = Secret<serde_json::Value>;
