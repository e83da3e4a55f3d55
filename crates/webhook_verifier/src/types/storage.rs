//! Storage models.

use common_utils::pii;

/// A merchant's configuration record for one connector. Owned by the
/// merchant onboarding flows; the verification path only ever reads it.
#[derive(Clone, Debug)]
pub struct MerchantConnectorAccount {
    pub id: i32,
    pub merchant_id: String,
    pub connector_name: String,
    pub connector_webhook_details: Option<pii::SecretSerdeValue>,
    pub metadata: Option<pii::SecretSerdeValue>,
    pub disabled: Option<bool>,
}

/// Insertable form of [`MerchantConnectorAccount`].
#[derive(Clone, Debug, Default)]
pub struct MerchantConnectorAccountNew {
    pub merchant_id: Option<String>,
    pub connector_name: Option<String>,
    pub connector_webhook_details: Option<pii::SecretSerdeValue>,
    pub metadata: Option<pii::SecretSerdeValue>,
    pub disabled: Option<bool>,
}
