use crate::config::Config;
use crate::constants::USER_AGENT;
use crate::error::AppError;
use async_trait::async_trait;
use reqwest::{Client, Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error};

/// Hook invoked with the endpoint path and the parsed response JSON after
/// every successful call
///
/// This replaces a "last response" slot on the client: callers that want to
/// inspect raw responses register a hook instead of reading shared state.
pub type ResponseHook = Arc<dyn Fn(&str, &Value) + Send + Sync>;

/// Builds a hook that dumps each response as pretty JSON to `path`
///
/// Useful for debugging the response parsers. The file is overwritten on
/// every call.
pub fn file_dump_hook(path: impl Into<PathBuf>) -> ResponseHook {
    let path = path.into();
    Arc::new(move |_endpoint, json| match serde_json::to_string_pretty(json) {
        Ok(text) => {
            if let Err(e) = std::fs::write(&path, text) {
                error!("Failed to dump response to {}: {}", path.display(), e);
            }
        }
        Err(e) => error!("Failed to serialize response for dump: {}", e),
    })
}

/// HTTP client trait for the TD Ameritrade API
///
/// The seam between the services and the network: services build paths and
/// query pairs and hand them to this trait, which owns authentication,
/// serialization and status handling.
#[async_trait]
pub trait TdaHttpClient: Send + Sync {
    /// Sends one request and deserializes the JSON response
    ///
    /// # Arguments
    /// * `method` - HTTP method
    /// * `path` - Endpoint path relative to the base URL
    /// * `query` - Query pairs, appended percent-encoded in the given order
    /// * `body` - Optional payload, serialized as JSON for POST/PUT calls
    ///
    /// # Returns
    /// * `Ok(T)` - Deserialized response (`T = ()` for endpoints that
    ///   answer with an empty body)
    /// * `Err(AppError)` - If the request or deserialization fails
    async fn request<B, T>(
        &self,
        method: Method,
        path: &str,
        query: &[(&'static str, String)],
        body: Option<&B>,
    ) -> Result<T, AppError>
    where
        B: Serialize + Sync,
        T: DeserializeOwned;
}

/// HTTP client implementation backed by reqwest
///
/// Holds the two credentials loaded at construction time and nothing else:
/// every call returns its value directly, so one instance can serve any
/// number of sequential calls without ordering requirements between them.
pub struct TdaHttpClientImpl {
    http_client: Client,
    config: Arc<Config>,
    response_hook: Option<ResponseHook>,
}

impl TdaHttpClientImpl {
    /// Creates a new HTTP client from the given configuration
    pub fn new(config: Arc<Config>) -> Result<Self, AppError> {
        let http_client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.rest_api.timeout))
            .build()?;

        Ok(Self {
            http_client,
            config,
            response_hook: None,
        })
    }

    /// Registers a hook to observe every successful response
    pub fn with_response_hook(mut self, hook: ResponseHook) -> Self {
        self.response_hook = Some(hook);
        self
    }

    fn build_url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.config.rest_api.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

#[async_trait]
impl TdaHttpClient for TdaHttpClientImpl {
    async fn request<B, T>(
        &self,
        method: Method,
        path: &str,
        query: &[(&'static str, String)],
        body: Option<&B>,
    ) -> Result<T, AppError>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        let url = self.build_url(path);
        debug!("{} {}", method, url);

        let mut request = self
            .http_client
            .request(method, &url)
            .header(
                "Authorization",
                format!("Bearer {}", self.config.credentials.access_token),
            )
            .header("Accept", "application/json");

        if !query.is_empty() {
            request = request.query(query);
        }

        if let Some(b) = body {
            request = request
                .header("Content-Type", "application/json; charset=UTF-8")
                .json(b);
        }

        let response = request.send().await?;
        let status = response.status();
        debug!("Response status: {}", status);

        if status == StatusCode::UNAUTHORIZED {
            let body_text = response.text().await.unwrap_or_default();
            error!("Unauthorized: {}", body_text);
            return Err(AppError::Unauthorized);
        }

        if !status.is_success() {
            let body_text = response.text().await.unwrap_or_default();
            error!("Request failed with status {}: {}", status, body_text);
            return Err(AppError::Request(status, body_text));
        }

        // Order submission endpoints answer 200/201 with an empty body
        let text = response.text().await?;
        let json: Value = if text.trim().is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&text)?
        };

        if let Some(hook) = &self.response_hook {
            hook(path, &json);
        }

        Ok(serde_json::from_value(json)?)
    }
}
