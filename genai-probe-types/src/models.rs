use crate::config::GenerationConfig;
use crate::content::Content;
use serde::{Deserialize, Serialize};

/// `GenerateContent` 请求配置。
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

/// `GenerateContent` 请求体。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

impl GenerateContentRequest {
    /// 由内容与配置组装请求体。
    #[must_use]
    pub fn new(contents: Vec<Content>, config: GenerateContentConfig) -> Self {
        Self {
            contents,
            system_instruction: config.system_instruction,
            generation_config: config.generation_config,
        }
    }
}
