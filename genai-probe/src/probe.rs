//! 连通性探测：发送一次固定请求并打印结果。

use std::io::Write;

use genai_probe_types::content::Content;
use genai_probe_types::response::GenerateContentResponse;

use crate::client::Client;
use crate::config::ProbeConfig;
use crate::error::{Error, Result};

pub const BEFORE_CALL: &str = "before API call";
pub const AFTER_CALL: &str = "after API call";

/// API 探测器。
pub struct Probe {
    client: Client,
    config: ProbeConfig,
}

impl Probe {
    /// # Errors
    /// 提示词为空时返回错误。
    pub fn new(client: Client, config: ProbeConfig) -> Result<Self> {
        if config.prompt.is_empty() {
            return Err(Error::InvalidConfig {
                message: "prompt must contain at least one text segment".into(),
            });
        }
        Ok(Self { client, config })
    }

    #[must_use]
    pub fn config(&self) -> &ProbeConfig {
        &self.config
    }

    /// 所有片段合并为一条用户消息。
    #[must_use]
    pub fn contents(&self) -> Vec<Content> {
        vec![Content::from_texts(self.config.prompt.iter().cloned())]
    }

    /// 执行探测并把三行输出写入 `out`。
    ///
    /// 输出顺序：`before API call`、`after API call`、响应文本。
    /// 响应没有文本时写入空行；请求失败时只写出第一行，错误原样返回。
    ///
    /// # Errors
    /// 请求失败或写入 `out` 失败时返回错误。
    pub async fn run<W: Write>(&self, out: &mut W) -> Result<GenerateContentResponse> {
        writeln!(out, "{BEFORE_CALL}")?;
        out.flush()?;

        let response = self
            .client
            .models()
            .generate_content(&self.config.model, self.contents())
            .await?;

        writeln!(out, "{AFTER_CALL}")?;
        writeln!(out, "{}", response.text().unwrap_or_default())?;
        out.flush()?;
        Ok(response)
    }
}
