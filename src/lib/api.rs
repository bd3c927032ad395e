//! HTTP helpers for JSON APIs with consistent timeouts and error handling. Feature
//! clients use these helpers to avoid duplicating request setup and to enforce a
//! predictable timeout policy. The transport itself only exists on `wasm32`; the
//! URL and error shaping below is target independent.

#![cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]

use super::errors::AppError;

/// Default request timeout (milliseconds) applied to all HTTP helpers.
const DEFAULT_TIMEOUT_MS: u32 = 10_000;
/// Maximum number of error body characters surfaced to the UI.
const MAX_ERROR_CHARS: usize = 200;

#[cfg(target_arch = "wasm32")]
pub use transport::{delete, get_json, post_json, put_json};

#[cfg(target_arch = "wasm32")]
mod transport {
    use super::{
        AppError, DEFAULT_TIMEOUT_MS, build_url_with_base, classify_request_error, sanitize_body,
    };
    use crate::app_lib::config::AppConfig;
    use gloo_net::http::{Request, RequestBuilder, Response};
    use gloo_timers::callback::Timeout;
    use serde::{Serialize, de::DeserializeOwned};
    use serde_json::to_string;
    use web_sys::AbortController;

    /// Fetches and decodes a JSON document.
    pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, AppError> {
        let url = build_url(path);
        tracing::debug!(%url, "GET");
        let response = send_with_timeout(|signal| {
            Request::get(&url)
                .abort_signal(Some(signal))
                .build()
                .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
        })
        .await?;

        handle_json_response(response).await
    }

    /// Posts a JSON body and expects a 2xx response; the body is ignored.
    pub async fn post_json<B: Serialize>(path: &str, body: &B) -> Result<(), AppError> {
        let url = build_url(path);
        tracing::debug!(%url, "POST");
        let payload = encode(body)?;
        let response =
            send_with_timeout(move |signal| with_json_body(Request::post(&url), signal, payload))
                .await?;

        handle_empty_response(response).await
    }

    /// Puts a JSON body and expects a 2xx response; the body is ignored.
    pub async fn put_json<B: Serialize>(path: &str, body: &B) -> Result<(), AppError> {
        let url = build_url(path);
        tracing::debug!(%url, "PUT");
        let payload = encode(body)?;
        let response =
            send_with_timeout(move |signal| with_json_body(Request::put(&url), signal, payload))
                .await?;

        handle_empty_response(response).await
    }

    /// Issues a DELETE without a body and expects a 2xx response.
    pub async fn delete(path: &str) -> Result<(), AppError> {
        let url = build_url(path);
        tracing::debug!(%url, "DELETE");
        let response = send_with_timeout(|signal| {
            Request::delete(&url)
                .abort_signal(Some(signal))
                .build()
                .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
        })
        .await?;

        handle_empty_response(response).await
    }

    fn encode<B: Serialize>(body: &B) -> Result<String, AppError> {
        to_string(body)
            .map_err(|err| AppError::Serialization(format!("Failed to encode request: {err}")))
    }

    fn with_json_body(
        builder: RequestBuilder,
        signal: &web_sys::AbortSignal,
        payload: String,
    ) -> Result<Request, AppError> {
        builder
            .header("Content-Type", "application/json")
            .abort_signal(Some(signal))
            .body(payload)
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    }

    /// Builds a URL from the configured API base URL and the provided path.
    fn build_url(path: &str) -> String {
        let config = AppConfig::load();
        build_url_with_base(&config.api_base_url, path)
    }

    /// Sends a request with an abort timeout to avoid hanging UI state.
    async fn send_with_timeout(
        build_request: impl FnOnce(&web_sys::AbortSignal) -> Result<Request, AppError>,
    ) -> Result<Response, AppError> {
        let controller = AbortController::new()
            .map_err(|_| AppError::Config("Failed to initialize request timeout.".to_string()))?;
        let signal = controller.signal();
        let timeout_controller = controller.clone();
        let _timeout = Timeout::new(DEFAULT_TIMEOUT_MS, move || timeout_controller.abort());

        let request = build_request(&signal)?;
        request
            .send()
            .await
            .map_err(|err| classify_request_error(&err.to_string()))
    }

    async fn handle_json_response<T: DeserializeOwned>(response: Response) -> Result<T, AppError> {
        if response.ok() {
            response
                .json::<T>()
                .await
                .map_err(|err| AppError::Parse(format!("Failed to decode response: {err}")))
        } else {
            Err(http_error(response).await)
        }
    }

    async fn handle_empty_response(response: Response) -> Result<(), AppError> {
        if response.ok() {
            Ok(())
        } else {
            Err(http_error(response).await)
        }
    }

    async fn http_error(response: Response) -> AppError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        AppError::Http {
            status,
            message: sanitize_body(&body),
        }
    }
}

/// Builds a URL from an explicit base URL and the provided path.
pub(crate) fn build_url_with_base(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

/// Maps transport failures into `AppError`, separating aborted (timed out) requests.
pub(crate) fn classify_request_error(message: &str) -> AppError {
    let lowered = message.to_lowercase();

    if lowered.contains("timeout") || lowered.contains("abort") {
        AppError::Timeout("Request timed out. Please try again.".to_string())
    } else {
        AppError::Network(format!("Unable to reach the server: {message}"))
    }
}

/// Sanitizes HTTP error bodies by trimming and truncating.
pub(crate) fn sanitize_body(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "Request failed.".to_string()
    } else {
        trimmed.chars().take(MAX_ERROR_CHARS).collect()
    }
}
