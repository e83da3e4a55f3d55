//! Types.

use serde::Deserialize;
use strum::{Display, EnumString};

/// Category and tag of log event.
///
/// Don't hesitate to add your variant if it is missing here.
#[derive(Debug, Default, Deserialize, Clone, Display, EnumString)]
pub enum Tag {
    /// General.
    #[default]
    General,

    /// API: incoming web request.
    ApiIncomingRequest,

    /// Begin Request
    BeginRequest,
    /// End Request
    EndRequest,

    /// Data base: read.
    DbRead,
    /// Data base: create.
    DbCreate,
    /// Data base: delete.
    DbDelete,
}

/// API Flow
#[derive(Debug, Display, Clone, PartialEq, Eq)]
pub enum Flow {
    /// Health check
    HealthCheck,
    /// Incoming webhook signature verification flow.
    IncomingWebhookVerify,
    /// Merchant Connectors create flow.
    MerchantConnectorsCreate,
    /// Merchant Connectors retrieve flow.
    MerchantConnectorsRetrieve,
    /// Merchant Connectors list flow.
    MerchantConnectorsList,
    /// Merchant Connectors delete flow.
    MerchantConnectorsDelete,
}

/// Trait for tagging the API flow of a request in logs and metrics.
pub trait FlowMetric: std::fmt::Display + std::fmt::Debug + Clone {}

impl FlowMetric for Flow {}
