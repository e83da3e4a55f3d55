pub mod merchant_connector_account;

use std::sync::Arc;

pub use self::merchant_connector_account::MerchantConnectorAccountInterface;
use crate::types::storage;

/// Storage capability required by the service. Kept behind a clonable trait
/// object so a database-backed account store can replace the in-memory one
/// without touching the flows.
pub trait StorageInterface:
    Send + Sync + dyn_clone::DynClone + MerchantConnectorAccountInterface + 'static
{
}

dyn_clone::clone_trait_object!(StorageInterface);

/// In-memory storage backend. Backs the service by default; the production
/// account store lives with the merchant onboarding service.
#[derive(Clone, Default)]
pub struct MockDb {
    pub merchant_connector_accounts:
        Arc<tokio::sync::Mutex<Vec<storage::MerchantConnectorAccount>>>,
}

impl MockDb {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageInterface for MockDb {}
