//! Translation between core flow results and HTTP responses.

use std::{fmt::Debug, future::Future};

use actix_web::{HttpRequest, HttpResponse};
use error_stack::Report;
use serde::Serialize;
use verifier_env::{instrument, tracing, types::FlowMetric, Tag};

use crate::{
    core::errors::{ApiErrorResponse, CustomResult},
    logger,
    routes::AppState,
};

/// Response shapes a core flow can produce.
#[derive(Debug, Eq, PartialEq)]
pub enum ApplicationResponse<R> {
    Json(R),
    StatusOk,
    TextPlain(String),
}

/// Runs a core flow for one request, logging request boundaries and
/// translating the outcome into an `HttpResponse`. Errors are rendered
/// through [`ApiErrorResponse`]'s `ResponseError` implementation.
#[instrument(
    skip(state, request, payload, func),
    fields(request_method, request_url_path)
)]
pub async fn server_wrap<'a, T, Q, F, Fut>(
    flow: impl FlowMetric,
    state: &'a AppState,
    request: &'a HttpRequest,
    payload: T,
    func: F,
) -> HttpResponse
where
    F: Fn(&'a AppState, T) -> Fut,
    Fut: Future<Output = CustomResult<ApplicationResponse<Q>, ApiErrorResponse>>,
    Q: Serialize + Debug + 'a,
    T: Debug,
{
    let request_method = request.method().as_str();
    let url_path = request.path();
    tracing::Span::current().record("request_method", request_method);
    tracing::Span::current().record("request_url_path", url_path);

    logger::info!(tag = ?Tag::BeginRequest, flow = %flow);

    let res = match func(state, payload).await {
        Ok(ApplicationResponse::Json(response)) => match serde_json::to_string(&response) {
            Ok(res) => http_response_json(res),
            Err(_) => http_response_err(
                r#"{
                    "error": {
                        "message": "Error serializing response"
                    }
                }"#,
            ),
        },
        Ok(ApplicationResponse::StatusOk) => http_response_ok(),
        Ok(ApplicationResponse::TextPlain(text)) => http_response_plaintext(text),
        Err(error) => log_and_return_error_response(error),
    };

    let status_code = res.status().as_u16();
    logger::info!(tag = ?Tag::EndRequest, status_code);

    res
}

pub fn http_response_json<T: actix_web::body::MessageBody + 'static>(response: T) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("application/json")
        .body(response)
}

pub fn http_response_plaintext<T: actix_web::body::MessageBody + 'static>(res: T) -> HttpResponse {
    HttpResponse::Ok().content_type("text/plain").body(res)
}

pub fn http_response_ok() -> HttpResponse {
    HttpResponse::Ok().finish()
}

pub fn http_response_err<T: actix_web::body::MessageBody + 'static>(response: T) -> HttpResponse {
    HttpResponse::BadRequest()
        .content_type("application/json")
        .body(response)
}

pub fn log_and_return_error_response(error: Report<ApiErrorResponse>) -> HttpResponse {
    logger::error!(?error);
    HttpResponse::from_error(error.current_context().clone())
}
