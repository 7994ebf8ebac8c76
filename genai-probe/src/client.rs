//! Client configuration and transport layer.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client as HttpClient, Proxy};

use crate::error::{Error, Result};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/";
const DEFAULT_API_VERSION: &str = "v1beta";
const API_KEY_HEADER: &str = "x-goog-api-key";

/// Gemini 客户端。
#[derive(Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

pub(crate) struct ClientInner {
    pub http: HttpClient,
    pub config: ClientConfig,
    pub api_client: ApiClient,
}

/// 客户端配置。
#[derive(Clone)]
pub struct ClientConfig {
    /// API 密钥（Gemini API）。
    pub api_key: String,
    /// HTTP 配置。
    pub http_options: HttpOptions,
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"<redacted>")
            .field("http_options", &self.http_options)
            .finish()
    }
}

/// HTTP 配置。
#[derive(Debug, Clone, Default)]
pub struct HttpOptions {
    /// 请求超时（秒）；未设置时不超时。
    pub timeout: Option<u64>,
    pub proxy: Option<String>,
    pub headers: HashMap<String, String>,
    pub base_url: Option<String>,
    pub api_version: Option<String>,
}

impl Client {
    /// 创建新客户端（Gemini API）。
    ///
    /// # Errors
    /// 当 API Key 为空或构建客户端失败时返回错误。
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::builder().api_key(api_key).build()
    }

    /// 从环境变量创建客户端。
    ///
    /// # Errors
    /// 当环境变量缺失、取值无效或构建客户端失败时返回错误。
    pub fn from_env() -> Result<Self> {
        ClientBuilder::from_env()?.build()
    }

    /// 创建 Builder。
    #[must_use]
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    /// 访问 Models API。
    #[must_use]
    pub fn models(&self) -> crate::models::Models {
        crate::models::Models::new(self.inner.clone())
    }

    /// 当前配置。
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }

    /// 规范化后的基础 URL（以 `/` 结尾）。
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.inner.api_client.base_url
    }

    /// 使用的 API 版本。
    #[must_use]
    pub fn api_version(&self) -> &str {
        &self.inner.api_client.api_version
    }
}

/// 客户端 Builder。
#[derive(Default)]
pub struct ClientBuilder {
    api_key: Option<String>,
    http_options: HttpOptions,
}

impl ClientBuilder {
    /// 从环境变量读取配置。
    ///
    /// - `GEMINI_API_KEY`，缺失时回退到 `GOOGLE_API_KEY`
    /// - `GENAI_BASE_URL` / `GEMINI_BASE_URL`、`GENAI_API_VERSION`（空白值忽略）
    /// - `GENAI_PROXY`：显式代理
    /// - `GENAI_TIMEOUT`：请求超时（秒）
    ///
    /// # Errors
    /// 当 API Key 缺失或 `GENAI_TIMEOUT` 不是整数时返回错误。
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .or_else(|_| std::env::var("GOOGLE_API_KEY"))
            .map_err(|_| Error::InvalidConfig {
                message: "GEMINI_API_KEY or GOOGLE_API_KEY not found".into(),
            })?;
        let mut builder = Self::default().api_key(api_key);
        if let Some(base_url) =
            non_blank_env("GENAI_BASE_URL").or_else(|| non_blank_env("GEMINI_BASE_URL"))
        {
            builder = builder.base_url(base_url);
        }
        if let Some(api_version) = non_blank_env("GENAI_API_VERSION") {
            builder = builder.api_version(api_version);
        }
        if let Some(proxy) = non_blank_env("GENAI_PROXY") {
            builder = builder.proxy(proxy);
        }
        if let Some(timeout) = non_blank_env("GENAI_TIMEOUT") {
            let secs = timeout
                .trim()
                .parse::<u64>()
                .map_err(|_| Error::InvalidConfig {
                    message: format!("GENAI_TIMEOUT must be whole seconds, got {timeout:?}"),
                })?;
            builder = builder.timeout(secs);
        }
        Ok(builder)
    }

    /// 设置 API Key（Gemini API）。
    #[must_use]
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// 设置请求超时（秒）。
    #[must_use]
    pub const fn timeout(mut self, secs: u64) -> Self {
        self.http_options.timeout = Some(secs);
        self
    }

    /// 设置代理。
    #[must_use]
    pub fn proxy(mut self, url: impl Into<String>) -> Self {
        self.http_options.proxy = Some(url.into());
        self
    }

    /// 增加默认 HTTP 头。
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.http_options.headers.insert(key.into(), value.into());
        self
    }

    /// 设置自定义基础 URL。
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.http_options.base_url = Some(base_url.into());
        self
    }

    /// 设置 API 版本。
    #[must_use]
    pub fn api_version(mut self, api_version: impl Into<String>) -> Self {
        self.http_options.api_version = Some(api_version.into());
        self
    }

    /// 构建客户端。
    ///
    /// # Errors
    /// 当 API Key 缺失或为空、参数无效或构建 HTTP 客户端失败时返回错误。
    pub fn build(self) -> Result<Client> {
        let Self {
            api_key,
            http_options,
        } = self;

        let api_key = Self::resolve_api_key(api_key)?;
        let headers = Self::build_headers(&http_options, &api_key)?;
        let http = Self::build_http_client(&http_options, headers)?;

        let config = ClientConfig {
            api_key,
            http_options,
        };
        let api_client = ApiClient::new(&config);

        Ok(Client {
            inner: Arc::new(ClientInner {
                http,
                config,
                api_client,
            }),
        })
    }

    fn resolve_api_key(api_key: Option<String>) -> Result<String> {
        match api_key {
            Some(key) if !key.is_empty() => Ok(key),
            Some(_) => Err(Error::InvalidConfig {
                message: "API key must not be empty".into(),
            }),
            None => Err(Error::InvalidConfig {
                message: "API key required for Gemini API".into(),
            }),
        }
    }

    fn build_headers(http_options: &HttpOptions, api_key: &str) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        for (key, value) in &http_options.headers {
            let name =
                HeaderName::from_bytes(key.as_bytes()).map_err(|_| Error::InvalidConfig {
                    message: format!("Invalid header name: {key}"),
                })?;
            let value = HeaderValue::from_str(value).map_err(|_| Error::InvalidConfig {
                message: format!("Invalid header value for {key}"),
            })?;
            headers.insert(name, value);
        }

        let header_name = HeaderName::from_static(API_KEY_HEADER);
        if !headers.contains_key(&header_name) {
            let mut header_value =
                HeaderValue::from_str(api_key).map_err(|_| Error::InvalidConfig {
                    message: "Invalid API key value".into(),
                })?;
            header_value.set_sensitive(true);
            headers.insert(header_name, header_value);
        }

        Ok(headers)
    }

    fn build_http_client(http_options: &HttpOptions, headers: HeaderMap) -> Result<HttpClient> {
        let mut http_builder = HttpClient::builder();
        if let Some(timeout) = http_options.timeout {
            http_builder = http_builder.timeout(Duration::from_secs(timeout));
        }

        if let Some(proxy_url) = &http_options.proxy {
            let proxy = Proxy::all(proxy_url).map_err(|e| Error::InvalidConfig {
                message: format!("Invalid proxy: {e}"),
            })?;
            http_builder = http_builder.proxy(proxy);
        }

        Ok(http_builder.default_headers(headers).build()?)
    }
}

pub(crate) fn non_blank_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .filter(|value| !value.trim().is_empty())
}

impl ClientInner {
    /// 发送请求。
    ///
    /// # Errors
    /// 当请求构建或网络请求失败时返回错误。
    pub async fn send(&self, request: reqwest::RequestBuilder) -> Result<reqwest::Response> {
        let request = request.build()?;
        tracing::debug!(method = %request.method(), url = %request.url(), "sending request");
        let response = self.http.execute(request).await?;
        tracing::debug!(status = response.status().as_u16(), "received response");
        Ok(response)
    }
}

pub(crate) struct ApiClient {
    pub base_url: String,
    pub api_version: String,
}

impl ApiClient {
    /// 创建 API 客户端配置。
    pub fn new(config: &ClientConfig) -> Self {
        let base_url = config
            .http_options
            .base_url
            .as_deref()
            .map_or_else(|| DEFAULT_BASE_URL.to_string(), normalize_base_url);

        let api_version = config
            .http_options
            .api_version
            .clone()
            .unwrap_or_else(|| DEFAULT_API_VERSION.to_string());

        Self {
            base_url,
            api_version,
        }
    }
}

fn normalize_base_url(base_url: &str) -> String {
    let mut value = base_url.trim().to_string();
    if !value.ends_with('/') {
        value.push('/');
    }
    value
}
