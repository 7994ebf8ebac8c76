use crate::client::ClientInner;
use crate::error::{Error, Result};

pub(super) fn transform_model_name(model: &str) -> String {
    if model.starts_with("models/") || model.starts_with("tunedModels/") {
        model.to_string()
    } else {
        format!("models/{model}")
    }
}

pub(super) fn build_model_method_url(
    inner: &ClientInner,
    model: &str,
    method: &str,
) -> Result<String> {
    if model.is_empty() {
        return Err(Error::InvalidConfig {
            message: "Model name must not be empty".into(),
        });
    }
    let model = transform_model_name(model);
    let base = &inner.api_client.base_url;
    let version = &inner.api_client.api_version;
    Ok(format!("{base}{version}/{model}:{method}"))
}
