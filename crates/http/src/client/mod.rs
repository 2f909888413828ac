//! BodyLover API client

pub mod auth;
pub mod config;
pub mod error;
pub mod interceptor;
pub mod response;
pub mod user;

pub use config::ClientConfig;
pub use error::ClientError;
pub use interceptor::{LoggingInterceptor, ResponseInterceptor};
pub use response::HttpResponse;

use reqwest::header::{HeaderName, HeaderValue};
use reqwest::{Client, ClientBuilder, Method, RequestBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;

/// Preconfigured client for the backend API
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    config: ClientConfig,
    interceptor: Arc<dyn ResponseInterceptor>,
}

impl ApiClient {
    /// Create a client with the default base URL, timeout and headers
    pub fn new() -> Result<Self, ClientError> {
        Self::builder().build()
    }

    /// Create a new client builder
    pub fn builder() -> ApiClientBuilder {
        ApiClientBuilder::default()
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.config.timeout
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Create a request builder for a path below the base URL
    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.config.base_url, path);
        self.client.request(method, url)
    }

    /// Send a request, read the body and run the outcome through the interceptor
    pub async fn send(&self, request: RequestBuilder) -> Result<HttpResponse, ClientError> {
        let result = self.exchange(request).await;
        self.interceptor.intercept(result)
    }

    /// Send a request and decode the JSON body
    ///
    /// Decoding happens before the interceptor runs, so a body that is not
    /// the expected JSON is observed as a failure like any other.
    pub async fn execute<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, ClientError> {
        let mut decoded = None;
        let outcome = self.exchange(request).await.and_then(|response| {
            decoded = Some(response.json::<T>()?);
            Ok(response)
        });

        let response = self.interceptor.intercept(outcome)?;
        match decoded {
            Some(value) => Ok(value),
            None => response.json(),
        }
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let request = self.request(Method::GET, path);
        self.execute(request).await
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.request(Method::POST, path).json(body);
        self.execute(request).await
    }

    async fn transfer(request: RequestBuilder) -> Result<HttpResponse, ClientError> {
        let response = request.send().await?;
        HttpResponse::read(response).await
    }

    #[cfg(not(target_arch = "wasm32"))]
    async fn exchange(&self, request: RequestBuilder) -> Result<HttpResponse, ClientError> {
        Self::transfer(request).await
    }

    // The browser fetch backend has no client-wide timeout, so race the whole
    // exchange, body included, against a timer.
    #[cfg(target_arch = "wasm32")]
    async fn exchange(&self, request: RequestBuilder) -> Result<HttpResponse, ClientError> {
        use futures::future::{Either, select};
        use gloo_timers::future::TimeoutFuture;

        let millis = u32::try_from(self.config.timeout.as_millis()).unwrap_or(u32::MAX);
        let transfer = std::pin::pin!(Self::transfer(request));
        let timer = std::pin::pin!(TimeoutFuture::new(millis));

        match select(transfer, timer).await {
            Either::Left((result, _)) => result,
            Either::Right(_) => Err(ClientError::Timeout),
        }
    }
}

/// Builder for ApiClient
#[derive(Default)]
pub struct ApiClientBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
    headers: Vec<(String, String)>,
    interceptor: Option<Arc<dyn ResponseInterceptor>>,
}

impl ApiClientBuilder {
    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Add a header sent with every request
    pub fn default_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Replace the logging interceptor
    pub fn interceptor(mut self, interceptor: Arc<dyn ResponseInterceptor>) -> Self {
        self.interceptor = Some(interceptor);
        self
    }

    /// Build the client
    pub fn build(self) -> Result<ApiClient, ClientError> {
        let mut config = ClientConfig::default();

        if let Some(base_url) = self.base_url {
            config.base_url = base_url;
        }
        reqwest::Url::parse(&config.base_url)
            .map_err(|e| ClientError::Configuration(format!("base_url: {e}")))?;
        // Ensure base_url ends without a trailing slash
        config.base_url = config.base_url.trim_end_matches('/').to_string();

        if let Some(timeout) = self.timeout {
            config.timeout = timeout;
        }

        for (name, value) in self.headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| ClientError::Configuration(format!("header {name}: {e}")))?;
            let value = HeaderValue::from_str(&value)
                .map_err(|e| ClientError::Configuration(format!("header {name}: {e}")))?;
            config.default_headers.insert(name, value);
        }

        let client_builder = ClientBuilder::new().default_headers(config.default_headers.clone());

        #[cfg(not(target_arch = "wasm32"))]
        let client_builder = client_builder.timeout(config.timeout);

        let client = client_builder.build().map_err(ClientError::Network)?;

        Ok(ApiClient {
            client,
            config,
            interceptor: self
                .interceptor
                .unwrap_or_else(|| Arc::new(LoggingInterceptor)),
        })
    }
}
