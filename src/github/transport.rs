//! HTTP transport seam
//!
//! The client never talks to `reqwest` directly: it builds an [`ApiRequest`],
//! hands it to a [`Transport`] and classifies the returned [`ApiResponse`].
//! [`HttpTransport`] is the production implementation.

use super::auth::Credential;
use super::error::{GitHubError, Result, TransportError};
use crate::config::ClientConfig;
use crate::constants;
use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use reqwest::{Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// One request against the API, path relative to the base URL
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub headers: HeaderMap,
    pub body: Option<serde_json::Value>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(constants::github::ACCEPT));
        Self {
            method,
            path: path.into(),
            headers,
            body: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Attach the bearer token
    pub fn authorized(mut self, credential: &Credential) -> Self {
        self.headers
            .insert(AUTHORIZATION, credential.auth_header().clone());
        self
    }

    /// Attach a JSON body
    pub fn with_json<B: Serialize>(mut self, body: &B) -> Result<Self> {
        self.body = Some(serde_json::to_value(body).map_err(GitHubError::Encode)?);
        Ok(self)
    }

    pub fn is_authorized(&self) -> bool {
        self.headers.contains_key(AUTHORIZATION)
    }
}

/// Percent-encode one path segment
///
/// `/`, `?`, `#` and `%` are escaped so the value stays inside its segment.
/// `.` and `..` return `None`: URL normalization would resolve them against
/// the surrounding path.
pub fn path_segment(value: &str) -> Option<String> {
    if value == "." || value == ".." {
        return None;
    }
    Some(urlencoding::encode(value).into_owned())
}

/// Status and raw body of a completed round trip
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Decode the body into an endpoint schema
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_str(&self.body).map_err(|e| {
            GitHubError::UnexpectedResponse(format!("{} (status {})", e, self.status.as_u16()))
        })
    }
}

/// Performs the actual network call
///
/// Implementations return `Err` only when no status code is available; any
/// HTTP response, successful or not, is an `Ok(ApiResponse)`.
#[cfg_attr(test, mockall::automock)]
pub trait Transport: Send + Sync {
    fn execute(&self, request: &ApiRequest) -> std::result::Result<ApiResponse, TransportError>;
}

/// Blocking `reqwest` transport with a fixed per-request timeout
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(config.timeout)
            .build()
            .map_err(GitHubError::ClientSetup)?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Transport for HttpTransport {
    fn execute(&self, request: &ApiRequest) -> std::result::Result<ApiResponse, TransportError> {
        let url = format!("{}{}", self.base_url, request.path);

        let mut builder = self
            .client
            .request(request.method.clone(), &url)
            .headers(request.headers.clone());

        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send()?;
        let status = response.status();
        let body = response.text()?;

        Ok(ApiResponse { status, body })
    }
}
