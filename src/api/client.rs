use crate::error::ApiError;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde_json::Value;
use std::time::Duration;

pub const DEFAULT_TIMEOUT_MS: u64 = 15_000;
const USER_AGENT: &str = concat!("resv-cli/", env!("CARGO_PKG_VERSION"));

/// One request, built per call and discarded.
#[derive(Debug, Clone)]
pub struct RequestConfig {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
    pub headers: HeaderMap,
    pub timeout: Duration,
}

impl RequestConfig {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::GET,
            path: path.into(),
            body: None,
            headers: HeaderMap::new(),
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
        }
    }

    pub fn post(path: impl Into<String>, body: Value) -> Self {
        Self {
            method: Method::POST,
            path: path.into(),
            body: Some(body),
            headers: HeaderMap::new(),
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_header(mut self, name: reqwest::header::HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    pub base_url: String,
    default_timeout: Duration,
}

impl ApiClient {
    // Create base client with default settings
    pub fn new(base_url: String) -> Result<Self, ApiError> {
        Self::with_timeout(base_url, Duration::from_millis(DEFAULT_TIMEOUT_MS))
    }

    pub fn with_timeout(base_url: String, default_timeout: Duration) -> Result<Self, ApiError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| ApiError::from_message(format!("Failed to create HTTP client: {}", e)))?;

        Ok(ApiClient {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            default_timeout,
        })
    }

    pub fn default_timeout(&self) -> Duration {
        self.default_timeout
    }

    /// Assemble a request: defaults first, caller-supplied headers on
    /// top (caller wins), bearer token only when the caller has not set
    /// its own Authorization header.
    pub fn build_request(&self, config: &RequestConfig, token: Option<&str>) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, config.path);

        // One header map, caller entries inserted over the defaults so
        // each name carries exactly one value and the caller's wins.
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        for (name, value) in config.headers.iter() {
            headers.insert(name, value.clone());
        }

        if let Some(token) = token {
            if !headers.contains_key(AUTHORIZATION) {
                if let Ok(value) = HeaderValue::from_str(&format!("Bearer {}", token)) {
                    headers.insert(AUTHORIZATION, value);
                }
            }
        }

        let mut request = self
            .client
            .request(config.method.clone(), url)
            .timeout(config.timeout)
            .headers(headers);

        if let Some(body) = &config.body {
            request = request.json(body);
        }

        request
    }

    /// Issue a single request and return the parsed JSON body. Any
    /// failure is classified before it propagates.
    pub async fn execute(
        &self,
        config: RequestConfig,
        token: Option<&str>,
    ) -> Result<Value, ApiError> {
        let endpoint = config.path.clone();
        let response = self
            .build_request(&config, token)
            .send()
            .await
            .map_err(|e| classify_transport_error(e, &endpoint))?;

        Self::handle_response(response, &endpoint).await
    }

    async fn handle_response(response: Response, endpoint: &str) -> Result<Value, ApiError> {
        let status = response.status();

        if status.is_success() {
            response.json::<Value>().await.map_err(|e| {
                ApiError::from_message(format!(
                    "Failed to parse response from {}: {}",
                    endpoint, e
                ))
            })
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::from_status(
                status.as_u16(),
                server_message(status, &body),
            ))
        }
    }
}

/// Pull the `message` field out of an error body; fall back to the
/// status line when the body is not JSON or carries no message.
fn server_message(status: StatusCode, body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(Value::as_str).map(String::from))
        .unwrap_or_else(|| {
            format!(
                "HTTP {}: {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown")
            )
        })
}

/// Classify a transport failure at its origin. The message matcher is
/// only the last resort for errors reqwest cannot identify.
fn classify_transport_error(error: reqwest::Error, endpoint: &str) -> ApiError {
    if error.is_timeout() {
        ApiError::timeout(format!("Request to {} timed out", endpoint))
    } else if error.is_connect() {
        ApiError::network(format!("Network request failed: {}", error))
    } else {
        ApiError::from_message(error.to_string())
    }
}
