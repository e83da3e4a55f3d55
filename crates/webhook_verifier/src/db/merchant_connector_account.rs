use super::MockDb;
use crate::{
    core::errors::{self, CustomResult},
    types::storage,
};

#[async_trait::async_trait]
pub trait MerchantConnectorAccountInterface {
    async fn insert_merchant_connector_account(
        &self,
        new: storage::MerchantConnectorAccountNew,
    ) -> CustomResult<storage::MerchantConnectorAccount, errors::StorageError>;

    async fn find_merchant_connector_account_by_merchant_id_merchant_connector_id(
        &self,
        merchant_id: &str,
        merchant_connector_id: i32,
    ) -> CustomResult<storage::MerchantConnectorAccount, errors::StorageError>;

    async fn list_merchant_connector_accounts_by_merchant_id(
        &self,
        merchant_id: &str,
    ) -> CustomResult<Vec<storage::MerchantConnectorAccount>, errors::StorageError>;

    async fn delete_merchant_connector_account_by_merchant_id_merchant_connector_id(
        &self,
        merchant_id: &str,
        merchant_connector_id: i32,
    ) -> CustomResult<bool, errors::StorageError>;
}

#[async_trait::async_trait]
impl MerchantConnectorAccountInterface for MockDb {
    async fn insert_merchant_connector_account(
        &self,
        new: storage::MerchantConnectorAccountNew,
    ) -> CustomResult<storage::MerchantConnectorAccount, errors::StorageError> {
        let mut accounts = self.merchant_connector_accounts.lock().await;
        let merchant_id = new.merchant_id.unwrap_or_default();
        let connector_name = new.connector_name.unwrap_or_default();

        if accounts.iter().any(|account| {
            account.merchant_id == merchant_id
                && account.connector_name.eq_ignore_ascii_case(&connector_name)
        }) {
            Err(errors::StorageError::DuplicateValue(format!(
                "merchant connector account {merchant_id}/{connector_name}"
            )))?;
        }

        let account = storage::MerchantConnectorAccount {
            #[allow(clippy::as_conversions)]
            id: accounts.len() as i32,
            merchant_id,
            connector_name,
            connector_webhook_details: new.connector_webhook_details,
            metadata: new.metadata,
            disabled: new.disabled,
        };
        accounts.push(account.clone());
        Ok(account)
    }

    async fn find_merchant_connector_account_by_merchant_id_merchant_connector_id(
        &self,
        merchant_id: &str,
        merchant_connector_id: i32,
    ) -> CustomResult<storage::MerchantConnectorAccount, errors::StorageError> {
        let accounts = self.merchant_connector_accounts.lock().await;
        accounts
            .iter()
            .find(|account| {
                account.merchant_id == merchant_id && account.id == merchant_connector_id
            })
            .cloned()
            .ok_or_else(|| {
                errors::StorageError::ValueNotFound(format!(
                    "merchant connector account {merchant_connector_id}"
                ))
                .into()
            })
    }

    async fn list_merchant_connector_accounts_by_merchant_id(
        &self,
        merchant_id: &str,
    ) -> CustomResult<Vec<storage::MerchantConnectorAccount>, errors::StorageError> {
        let accounts = self.merchant_connector_accounts.lock().await;
        Ok(accounts
            .iter()
            .filter(|account| account.merchant_id == merchant_id)
            .cloned()
            .collect())
    }

    async fn delete_merchant_connector_account_by_merchant_id_merchant_connector_id(
        &self,
        merchant_id: &str,
        merchant_connector_id: i32,
    ) -> CustomResult<bool, errors::StorageError> {
        let mut accounts = self.merchant_connector_accounts.lock().await;
        let position = accounts
            .iter()
            .position(|account| {
                account.merchant_id == merchant_id && account.id == merchant_connector_id
            })
            .ok_or_else(|| {
                errors::StorageError::ValueNotFound(format!(
                    "merchant connector account {merchant_connector_id}"
                ))
            })?;
        accounts.remove(position);
        Ok(true)
    }
}
