//! API client for authenticated resource requests
//!
//! Builds every request against the resource API: bearer header from the
//! injected token provider, JSON serialization for structured bodies,
//! multipart passthrough for uploads, and uniform response classification.
//!
//! A request that comes back 401 triggers one token refresh and one replay
//! of the original request; a second 401 (or an impossible refresh)
//! surfaces the failure to the caller.

use std::sync::Arc;

use reqwest::{Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use super::auth::AccessTokenProvider;
use super::errors::ApiError;
use crate::http::HttpClient;

/// Multipart payload for binary uploads.
///
/// Parts are kept in plain buffers so the request can be rebuilt when it is
/// replayed after a token refresh (reqwest forms are consumed on send). The
/// caller decides explicitly between this and a JSON body; nothing is
/// sniffed from the value's shape.
#[derive(Debug, Clone, Default)]
pub struct UploadForm {
    parts: Vec<(String, UploadPart)>,
}

#[derive(Debug, Clone)]
enum UploadPart {
    Text(String),
    File { filename: String, bytes: Vec<u8> },
}

impl UploadForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a plain text field.
    #[must_use]
    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.parts.push((name.into(), UploadPart::Text(value.into())));
        self
    }

    /// Add a file field.
    #[must_use]
    pub fn file(
        mut self,
        name: impl Into<String>,
        filename: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        self.parts.push((name.into(), UploadPart::File { filename: filename.into(), bytes }));
        self
    }

    fn to_multipart(&self) -> reqwest::multipart::Form {
        let mut form = reqwest::multipart::Form::new();
        for (name, part) in &self.parts {
            form = match part {
                UploadPart::Text(value) => form.text(name.clone(), value.clone()),
                UploadPart::File { filename, bytes } => form.part(
                    name.clone(),
                    reqwest::multipart::Part::bytes(bytes.clone()).file_name(filename.clone()),
                ),
            };
        }
        form
    }
}

/// Client for the bearer-authenticated resource API
pub struct ApiClient {
    http: HttpClient,
    base_url: String,
    auth: Arc<dyn AccessTokenProvider>,
}

impl ApiClient {
    /// Create a new API client.
    ///
    /// # Arguments
    ///
    /// * `http` - Transport to issue requests with
    /// * `base_url` - Resource API base URL; a trailing slash is stripped
    /// * `auth` - Token provider, normally the session store
    pub fn new(
        http: HttpClient,
        base_url: impl Into<String>,
        auth: Arc<dyn AccessTokenProvider>,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url, auth }
    }

    /// Execute a GET request.
    pub async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        self.request_json(Method::GET, endpoint, None).await
    }

    /// Execute a POST request with a JSON body.
    pub async fn post<T, B>(&self, endpoint: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request_json(Method::POST, endpoint, Some(to_json(body)?)).await
    }

    /// Execute a PUT request with a JSON body.
    pub async fn put<T, B>(&self, endpoint: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request_json(Method::PUT, endpoint, Some(to_json(body)?)).await
    }

    /// Execute a PATCH request with a JSON body.
    pub async fn patch<T, B>(&self, endpoint: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request_json(Method::PATCH, endpoint, Some(to_json(body)?)).await
    }

    /// Execute a DELETE request.
    pub async fn delete<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        self.request_json(Method::DELETE, endpoint, None).await
    }

    /// Upload a multipart form.
    ///
    /// The JSON content-type is deliberately not set so the transport can
    /// generate the multipart boundary; the bearer header is still attached
    /// when a token is held.
    pub async fn upload<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        form: UploadForm,
    ) -> Result<T, ApiError> {
        let url = self.url(endpoint);
        let response = self.execute_upload(&url, &form).await?;

        if response.status() == StatusCode::UNAUTHORIZED {
            return match self.retry_after_refresh(response).await {
                Retry::Replay(original) => match self.execute_upload(&url, &form).await {
                    Ok(retried) => classify(retried).await,
                    Err(_) => Err(original),
                },
                Retry::Give(err) => Err(err),
            };
        }

        classify(response).await
    }

    async fn request_json<T: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<Value>,
    ) -> Result<T, ApiError> {
        let url = self.url(endpoint);
        let response = self.execute(method.clone(), &url, body.as_ref()).await?;

        if response.status() == StatusCode::UNAUTHORIZED {
            return match self.retry_after_refresh(response).await {
                Retry::Replay(original) => match self.execute(method, &url, body.as_ref()).await {
                    Ok(retried) => classify(retried).await,
                    Err(_) => Err(original),
                },
                Retry::Give(err) => Err(err),
            };
        }

        classify(response).await
    }

    /// One attempt of a JSON request with the current token snapshot.
    async fn execute(
        &self,
        method: Method,
        url: &str,
        body: Option<&Value>,
    ) -> Result<Response, ApiError> {
        let mut request =
            self.http.request(method, url).header("Content-Type", "application/json");

        if let Some(token) = self.auth.access_token().await {
            request = request.header("Authorization", format!("Bearer {token}"));
        }

        if let Some(body) = body {
            request = request.json(body);
        }

        self.http.send(request).await
    }

    async fn execute_upload(&self, url: &str, form: &UploadForm) -> Result<Response, ApiError> {
        let mut request = self.http.request(Method::POST, url).multipart(form.to_multipart());

        if let Some(token) = self.auth.access_token().await {
            request = request.header("Authorization", format!("Bearer {token}"));
        }

        self.http.send(request).await
    }

    /// Decide what to do with an observed 401: refresh and replay once, or
    /// surface the original failure when no refresh is possible.
    async fn retry_after_refresh(&self, response: Response) -> Retry {
        let original = error_from_response(response).await;

        match self.auth.refresh().await {
            Ok(()) => {
                debug!("access token refreshed after 401, replaying request");
                Retry::Replay(original)
            }
            Err(refresh_err) => {
                warn!(error = %refresh_err, "token refresh after 401 failed");
                Retry::Give(original)
            }
        }
    }

    fn url(&self, endpoint: &str) -> String {
        if endpoint.starts_with('/') {
            format!("{}{}", self.base_url, endpoint)
        } else {
            format!("{}/{}", self.base_url, endpoint)
        }
    }
}

enum Retry {
    /// Refresh succeeded; replay once. Carries the original failure in case
    /// the replay cannot be sent at all.
    Replay(ApiError),
    /// Refresh was not possible; surface the original failure.
    Give(ApiError),
}

fn to_json<B: Serialize + ?Sized>(body: &B) -> Result<Value, ApiError> {
    serde_json::to_value(body)
        .map_err(|err| ApiError::InvalidRequest(format!("failed to serialize body: {err}")))
}

/// Convert a response into the typed result.
///
/// Non-success statuses become [`ApiError::Status`] with the extracted
/// message. A successful response that is not JSON, or whose JSON body does
/// not parse, degrades to the empty result instead of failing.
pub(crate) async fn classify<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    if !status.is_success() {
        return Err(error_from_response(response).await);
    }

    if !is_json(&response) {
        return empty_result();
    }

    let bytes = response.bytes().await.map_err(|err| ApiError::Network(err.to_string()))?;
    match serde_json::from_slice(&bytes) {
        Ok(value) => Ok(value),
        Err(_) => empty_result(),
    }
}

async fn error_from_response(response: Response) -> ApiError {
    let status = response.status();
    let status_text = status.canonical_reason().unwrap_or("HTTP error").to_string();

    let message = if is_json(&response) {
        match response.json::<Value>().await {
            Ok(body) => body
                .get("detail")
                .and_then(Value::as_str)
                .map(str::to_string)
                .or_else(|| body.get("message").and_then(Value::as_str).map(str::to_string))
                .unwrap_or_else(|| body.to_string()),
            Err(_) => status_text,
        }
    } else {
        status_text
    };

    ApiError::Status { status, message }
}

fn is_json(response: &Response) -> bool {
    response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.contains("application/json"))
        .unwrap_or(false)
}

/// The empty result used when a success response carries no usable JSON.
fn empty_result<T: DeserializeOwned>() -> Result<T, ApiError> {
    serde_json::from_value(Value::Object(serde_json::Map::new()))
        .or_else(|_| serde_json::from_value(Value::Null))
        .map_err(|err| {
            ApiError::InvalidRequest(format!(
                "response type cannot be produced from an empty body: {err}"
            ))
        })
}
