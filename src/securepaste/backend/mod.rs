//! # Backend Layer
//!
//! A [`Backend`] performs one request/response exchange with the paste
//! service. Commands build an [`ApiRequest`], hand it to the backend and
//! interpret the [`ApiResponse`]; they never touch the transport directly.
//!
//! ## Implementations
//!
//! - [`http::HttpBackend`]: production backend over a connection-reusing
//!   `reqwest` blocking client. Every request carries the JSON content type
//!   and the client's `User-Agent`.
//!
//! - [`memory::MemoryBackend`]: an in-process stand-in for the service
//!   - No network, no persistence
//!   - Implements view counting, password checks, soft deletion, expiry,
//!     search and statistics the way the service does
//!   - Records every request it receives so dispatch can be asserted on
//!
//! ## Error Contract
//!
//! `execute` returns `Err` only when no HTTP response was obtained (refused
//! connection, DNS, timeout). Any status code, including 4xx and 5xx, comes
//! back as an `Ok(ApiResponse)` so the command layer can decide what it means.

use crate::error::Result;
use serde_json::Value;
use std::fmt;

pub mod http;
pub mod memory;

/// Path prefix every endpoint lives under.
pub const API_PREFIX: &str = "/api/pastes";

/// `User-Agent` sent with every request.
pub const USER_AGENT: &str = concat!("SecurePaste-Rust-Client/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        };
        write!(f, "{}", name)
    }
}

/// A request relative to [`API_PREFIX`].
///
/// `segments` are raw path segments; backends are responsible for encoding
/// them, so a language such as `c++` or `objective c` stays one segment.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub segments: Vec<String>,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn new<I, S>(method: Method, segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            method,
            segments: segments.into_iter().map(Into::into).collect(),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn get<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(Method::Get, segments)
    }

    pub fn with_query(mut self, key: &str, value: impl ToString) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Unencoded path below the API prefix, for logs and messages.
    pub fn path(&self) -> String {
        if self.segments.is_empty() {
            API_PREFIX.to_string()
        } else {
            format!("{}/{}", API_PREFIX, self.segments.join("/"))
        }
    }

    /// Path and query for logging, with secret query values masked.
    pub fn redacted(&self) -> String {
        if self.query.is_empty() {
            return self.path();
        }
        let query: Vec<String> = self
            .query
            .iter()
            .map(|(k, v)| {
                if SECRET_PARAMS.contains(&k.as_str()) {
                    format!("{}=***", k)
                } else {
                    format!("{}={}", k, v)
                }
            })
            .collect();
        format!("{}?{}", self.path(), query.join("&"))
    }
}

/// Query parameters never written to logs.
const SECRET_PARAMS: &[&str] = &["password"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// One exchange with the paste service.
pub trait Backend {
    fn execute(&self, request: &ApiRequest) -> Result<ApiResponse>;

    /// Human-readable location of the service, used in messages.
    fn describe(&self) -> String;
}

impl<B: Backend + ?Sized> Backend for &B {
    fn execute(&self, request: &ApiRequest) -> Result<ApiResponse> {
        (**self).execute(request)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}
