//! Error types surfaced by the service layers.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};

pub use common_utils::errors::{CustomResult, ParsingError, ValidationError};

use crate::{services, types::api};

/// Result alias for core flows.
pub type RouterResult<T> = CustomResult<T, ApiErrorResponse>;

/// Result of a core flow as consumed by [`services::api::server_wrap`].
pub type RouterResponse<T> = CustomResult<services::ApplicationResponse<T>, ApiErrorResponse>;

/// Result alias for application startup.
pub type ApplicationResult<T> = Result<T, ApplicationError>;

/// Errors that can abort application startup.
#[derive(Debug, thiserror::Error)]
pub enum ApplicationError {
    #[error("Invalid configuration value provided: {0}")]
    InvalidConfigurationValueError(String),

    #[error("Failed to construct application configuration: {0}")]
    ConfigurationError(#[from] config::ConfigError),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Storage layer errors.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Value not found in storage: {0}")]
    ValueNotFound(String),

    #[error("A value with the given constraints already exists: {0}")]
    DuplicateValue(String),

    #[error("Storage operation failed: {0}")]
    DatabaseError(String),
}

/// Errors raised inside a connector's webhook handling.
#[derive(Debug, thiserror::Error)]
pub enum ConnectorError {
    #[error("Failed to verify webhook source")]
    WebhookSourceVerificationFailed,

    #[error("Could not find webhook signature in the incoming request")]
    WebhookSignatureNotFound,

    #[error("Webhook verification secret not found")]
    WebhookVerificationSecretNotFound,
}

/// Errors reported over the HTTP boundary.
///
/// Webhook-flow variants render the `{"verified": false, ...}` envelope the
/// verification endpoint promises; everything else renders the generic error
/// envelope.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ApiErrorResponse {
    #[error("Webhook secret not found")]
    WebhookSecretNotFound { connector: String },

    #[error("{reason}")]
    WebhookProcessingFailure { connector: String, reason: String },

    #[error("Missing required param: {field_name}")]
    MissingRequiredField { field_name: &'static str },

    #[error("The connector provided in the request is incorrect or not available")]
    IncorrectConnectorNameGiven,

    #[error("Merchant connector account does not exist in our records")]
    MerchantConnectorAccountNotFound,

    #[error("Merchant connector account with the given connector already exists: {connector}")]
    DuplicateMerchantConnectorAccount { connector: String },

    #[error("Something went wrong")]
    InternalServerError,
}

#[derive(Debug, serde::Serialize)]
struct ApiError {
    error: ErrorBody,
}

#[derive(Debug, serde::Serialize)]
struct ErrorBody {
    message: String,
}

impl ResponseError for ApiErrorResponse {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::WebhookSecretNotFound { .. }
            | Self::WebhookProcessingFailure { .. }
            | Self::MissingRequiredField { .. }
            | Self::IncorrectConnectorNameGiven
            | Self::DuplicateMerchantConnectorAccount { .. } => StatusCode::BAD_REQUEST,
            Self::MerchantConnectorAccountNotFound => StatusCode::NOT_FOUND,
            Self::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            Self::WebhookSecretNotFound { connector }
            | Self::WebhookProcessingFailure { connector, .. } => {
                HttpResponse::build(self.status_code()).json(api::WebhookVerificationResponse {
                    verified: false,
                    connector: connector.clone(),
                    error: Some(self.to_string()),
                })
            }
            _ => HttpResponse::build(self.status_code()).json(ApiError {
                error: ErrorBody {
                    message: self.to_string(),
                },
            }),
        }
    }
}

/// Extension for converting storage errors into API error responses.
pub trait StorageErrorExt<T, E> {
    fn to_not_found_response(self, not_found_response: E) -> error_stack::Result<T, E>;

    fn to_duplicate_response(self, duplicate_response: E) -> error_stack::Result<T, E>;
}

impl<T> StorageErrorExt<T, ApiErrorResponse> for error_stack::Result<T, StorageError> {
    fn to_not_found_response(
        self,
        not_found_response: ApiErrorResponse,
    ) -> error_stack::Result<T, ApiErrorResponse> {
        self.map_err(|err| {
            if matches!(err.current_context(), StorageError::ValueNotFound(_)) {
                err.change_context(not_found_response)
            } else {
                err.change_context(ApiErrorResponse::InternalServerError)
            }
        })
    }

    fn to_duplicate_response(
        self,
        duplicate_response: ApiErrorResponse,
    ) -> error_stack::Result<T, ApiErrorResponse> {
        self.map_err(|err| {
            if matches!(err.current_context(), StorageError::DuplicateValue(_)) {
                err.change_context(duplicate_response)
            } else {
                err.change_context(ApiErrorResponse::InternalServerError)
            }
        })
    }
}
