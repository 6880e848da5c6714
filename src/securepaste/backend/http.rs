use super::{ApiRequest, ApiResponse, Backend, Method, USER_AGENT};
use crate::config::ClientConfig;
use crate::error::{PasteError, Result};
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::Url;

/// Talks to the paste service over HTTP.
///
/// Holds a single `reqwest` blocking client, so connections are reused across
/// calls. No retries; the timeout is the transport default unless the config
/// sets one.
pub struct HttpBackend {
    client: Client,
    api_base: Url,
}

impl HttpBackend {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let api_base = Url::parse(&config.api_base()).map_err(|e| {
            PasteError::Config(format!("Invalid base URL '{}': {}", config.base_url, e))
        })?;
        if api_base.cannot_be_a_base() {
            return Err(PasteError::Config(format!(
                "Base URL '{}' cannot hold a path",
                config.base_url
            )));
        }

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let mut builder = Client::builder()
            .default_headers(headers)
            .user_agent(USER_AGENT);
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| PasteError::Config(format!("Could not build HTTP client: {}", e)))?;

        Ok(Self { client, api_base })
    }

    fn url_for(&self, request: &ApiRequest) -> Result<Url> {
        let mut url = self.api_base.clone();
        url.path_segments_mut()
            .map_err(|_| PasteError::Config("Base URL cannot hold a path".into()))?
            .pop_if_empty()
            .extend(&request.segments);
        if !request.query.is_empty() {
            url.query_pairs_mut().extend_pairs(
                request
                    .query
                    .iter()
                    .map(|(k, v)| (k.as_str(), v.as_str())),
            );
        }
        Ok(url)
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

impl Backend for HttpBackend {
    fn execute(&self, request: &ApiRequest) -> Result<ApiResponse> {
        let url = self.url_for(request)?;
        let target = request.redacted();
        log::debug!("{} {}", request.method, target);

        let mut builder = self.client.request(request.method.into(), url);
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().map_err(|e| {
            let e = e.without_url();
            log::debug!("{} {} failed: {}", request.method, target, e);
            PasteError::Transport(e.to_string())
        })?;
        let status = response.status().as_u16();
        let body = response.text()?;
        log::debug!("{} {} -> {}", request.method, target, status);

        Ok(ApiResponse { status, body })
    }

    fn describe(&self) -> String {
        self.api_base.to_string()
    }
}
