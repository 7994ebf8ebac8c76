//! Models API surface.

use std::sync::Arc;

use genai_probe_types::content::Content;
use genai_probe_types::models::{GenerateContentConfig, GenerateContentRequest};
use genai_probe_types::response::GenerateContentResponse;

use crate::client::ClientInner;
use crate::error::{Error, Result};

mod http;

use self::http::build_model_method_url;

#[derive(Clone)]
pub struct Models {
    pub(crate) inner: Arc<ClientInner>,
}

impl Models {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// 生成内容（默认配置）。
    ///
    /// # Errors
    /// 当参数无效、网络失败、服务端返回非 2xx 或响应无法解析时返回错误。
    pub async fn generate_content(
        &self,
        model: impl Into<String>,
        contents: Vec<Content>,
    ) -> Result<GenerateContentResponse> {
        self.generate_content_with_config(model, contents, GenerateContentConfig::default())
            .await
    }

    /// 生成内容（自定义配置）。
    ///
    /// 模型名与内容原样发送，不做裁剪或转义。
    ///
    /// # Errors
    /// 当参数无效、网络失败、服务端返回非 2xx 或响应无法解析时返回错误。
    pub async fn generate_content_with_config(
        &self,
        model: impl Into<String>,
        contents: Vec<Content>,
        config: GenerateContentConfig,
    ) -> Result<GenerateContentResponse> {
        let model = model.into();
        if contents.is_empty() {
            return Err(Error::InvalidConfig {
                message: "contents must contain at least one item".into(),
            });
        }

        let url = build_model_method_url(&self.inner, &model, "generateContent")?;
        let request = GenerateContentRequest::new(contents, config);
        tracing::debug!(model = %model, contents = request.contents.len(), "generateContent");

        let request = self.inner.http.post(url).json(&request);
        let response = self.inner.send(request).await?;
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), model = %model, "generateContent failed");
            return Err(Error::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}
