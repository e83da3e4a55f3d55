use common_utils::pii;
use masking::Secret;

use crate::types::storage;

/// Webhook credentials configured on a merchant's connector account, stored
/// inside the account's `connector_webhook_details` JSON.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct MerchantConnectorWebhookDetails {
    pub webhook_secret: Option<Secret<String>>,
    pub merchant_secret: Option<Secret<String>>,
}

/// Request payload for creating a merchant connector account.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct MerchantConnectorCreate {
    pub connector_name: String,
    pub connector_webhook_details: Option<pii::SecretSerdeValue>,
    pub metadata: Option<pii::SecretSerdeValue>,
    pub disabled: Option<bool>,
}

/// API representation of a merchant connector account.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct MerchantConnectorResponse {
    pub merchant_connector_id: i32,
    pub merchant_id: String,
    pub connector_name: String,
    pub connector_webhook_details: Option<pii::SecretSerdeValue>,
    pub metadata: Option<pii::SecretSerdeValue>,
    pub disabled: Option<bool>,
}

impl From<storage::MerchantConnectorAccount> for MerchantConnectorResponse {
    fn from(account: storage::MerchantConnectorAccount) -> Self {
        Self {
            merchant_connector_id: account.id,
            merchant_id: account.merchant_id,
            connector_name: account.connector_name,
            connector_webhook_details: account.connector_webhook_details,
            metadata: account.metadata,
            disabled: account.disabled,
        }
    }
}

/// Confirmation returned when a connector account is deleted.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct MerchantConnectorDeleteResponse {
    pub merchant_id: String,
    pub merchant_connector_id: i32,
    pub deleted: bool,
}
