use crate::error::HttpError;
use crate::http::ApiResult;
use log::{debug, warn};
use reqwest::Method;
use reqwest::blocking::{Client, RequestBuilder, Response};
use serde_json::Value;
use std::collections::HashMap;
use std::time::Duration;

const DEFAULT_TIMEOUT_SECS: u64 = 30;
const USER_AGENT: &str = concat!("utilikit/", env!("CARGO_PKG_VERSION"));

/// Optional request headers, passed through unmodified.
pub type Headers = HashMap<String, String>;

/// Optional query parameters, passed through unmodified.
pub type QueryParams = HashMap<String, String>;

#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Create a client with the default timeout.
    pub fn new() -> Result<Self, HttpError> {
        Self::with_timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self, HttpError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| HttpError::ClientInit(e.to_string()))?;

        Ok(HttpClient { client })
    }

    /// Send a GET request.
    pub fn get(
        &self,
        url: &str,
        headers: Option<&Headers>,
        params: Option<&QueryParams>,
    ) -> ApiResult {
        let mut request = self.client.request(Method::GET, url);
        if let Some(params) = params {
            request = request.query(params);
        }
        self.dispatch(request, headers, url)
    }

    /// Send a POST request with an optional JSON body.
    pub fn post(&self, url: &str, body: Option<&Value>, headers: Option<&Headers>) -> ApiResult {
        self.send_with_body(Method::POST, url, body, headers)
    }

    /// Send a PUT request with an optional JSON body.
    pub fn put(&self, url: &str, body: Option<&Value>, headers: Option<&Headers>) -> ApiResult {
        self.send_with_body(Method::PUT, url, body, headers)
    }

    fn send_with_body(
        &self,
        method: Method,
        url: &str,
        body: Option<&Value>,
        headers: Option<&Headers>,
    ) -> ApiResult {
        let mut request = self.client.request(method, url);
        if let Some(body) = body {
            request = request.json(body);
        }
        self.dispatch(request, headers, url)
    }

    fn dispatch(
        &self,
        mut request: RequestBuilder,
        headers: Option<&Headers>,
        url: &str,
    ) -> ApiResult {
        if let Some(headers) = headers {
            for (name, value) in headers {
                request = request.header(name.as_str(), value.as_str());
            }
        }

        match request.send() {
            Ok(response) => Self::handle_response(response, url),
            Err(e) => {
                warn!("Request to {} failed: {}", url, e);
                ApiResult::error(e.to_string())
            }
        }
    }

    fn handle_response(response: Response, url: &str) -> ApiResult {
        let status = response.status();

        if status.is_success() {
            match response.json::<Value>() {
                Ok(value) => {
                    debug!("HTTP {} from {}", status.as_u16(), url);
                    ApiResult::Json(value)
                }
                Err(e) => ApiResult::error(format!("Failed to parse response from {}: {}", url, e)),
            }
        } else {
            let error_text = response
                .text()
                .unwrap_or_else(|_| "Unknown error".to_string());

            warn!("HTTP {} from {}", status.as_u16(), url);
            ApiResult::error(format!(
                "HTTP {} for {}: {}",
                status.as_u16(),
                url,
                error_text
            ))
        }
    }
}
