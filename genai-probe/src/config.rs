//! Probe configuration.

use crate::client::non_blank_env;

/// 默认探测模型。
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash-exp-image-generation";
/// 默认提示词。
pub const DEFAULT_PROMPT: &str = "Test prompt";

/// 一次探测所用的模型与提示词。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeConfig {
    pub model: String,
    /// 按顺序发送的文本片段。
    pub prompt: Vec<String>,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            prompt: vec![DEFAULT_PROMPT.to_string()],
        }
    }
}

impl ProbeConfig {
    pub fn new(model: impl Into<String>, prompt: Vec<String>) -> Self {
        Self {
            model: model.into(),
            prompt,
        }
    }

    /// 读取 `GENAI_PROBE_MODEL` / `GENAI_PROBE_PROMPT`，未设置或为空白时使用默认值。
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(model) = non_blank_env("GENAI_PROBE_MODEL") {
            config.model = model;
        }
        if let Some(prompt) = non_blank_env("GENAI_PROBE_PROMPT") {
            config.prompt = vec![prompt];
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::with_env;

    #[test]
    fn defaults_match_fixed_probe() {
        let config = ProbeConfig::default();
        assert_eq!(config.model, "gemini-2.0-flash-exp-image-generation");
        assert_eq!(config.prompt, vec!["Test prompt".to_string()]);
    }

    #[test]
    fn env_overrides_are_taken_verbatim() {
        with_env(
            &[
                ("GENAI_PROBE_MODEL", Some("gemini-2.0-flash")),
                ("GENAI_PROBE_PROMPT", Some("  say hi  ")),
            ],
            || {
                let config = ProbeConfig::from_env();
                assert_eq!(config.model, "gemini-2.0-flash");
                assert_eq!(config.prompt, vec!["  say hi  ".to_string()]);
            },
        );
    }

    #[test]
    fn blank_env_falls_back_to_defaults() {
        with_env(
            &[
                ("GENAI_PROBE_MODEL", Some(" ")),
                ("GENAI_PROBE_PROMPT", None),
            ],
            || assert_eq!(ProbeConfig::from_env(), ProbeConfig::default()),
        );
    }
}
