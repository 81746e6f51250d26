//! One-shot vision provider call.

use crate::types::VisionConfig;
use reqwest::Client;
use serde_json::json;
use tracing::debug;

/// Errors from one vision provider call.
#[derive(Debug, thiserror::Error)]
pub enum VisionError {
    #[error("Cannot reach vision provider at {0}: {1}")]
    Connection(String, String),

    #[error("Vision provider returned HTTP {0}: {1}")]
    Api(u16, String),

    #[error("Invalid response envelope from vision provider: {0}")]
    InvalidResponse(String),

    #[error("Vision provider returned no content")]
    EmptyContent,
}

/// Send one (instruction, image) pair to the provider and return the
/// model's raw output text.
///
/// Issues exactly one `POST {endpoint}/chat/completions` with the
/// instruction as a text part and the data URL as an image part,
/// requesting JSON-formatted output. No retry, no caching; each failure
/// mode propagates as a distinct [`VisionError`].
pub async fn analyze_image(
    client: &Client,
    config: &VisionConfig,
    instruction: &str,
    data_url: &str,
) -> Result<String, VisionError> {
    let body = json!({
        "model": config.model,
        "messages": [{
            "role": "user",
            "content": [
                { "type": "text", "text": instruction },
                { "type": "image_url", "image_url": { "url": data_url } }
            ]
        }],
        "response_format": { "type": "json_object" },
        "max_tokens": 2048
    });

    let url = format!("{}/chat/completions", config.endpoint.trim_end_matches('/'));
    debug!(model = %config.model, "Requesting vision analysis");

    let resp = client
        .post(&url)
        .bearer_auth(&config.api_key)
        .timeout(config.timeout)
        .json(&body)
        .send()
        .await
        .map_err(|e| VisionError::Connection(config.endpoint.clone(), e.to_string()))?;

    if !resp.status().is_success() {
        let status = resp.status().as_u16();
        let text = resp.text().await.unwrap_or_default();
        return Err(VisionError::Api(status, text));
    }

    let envelope: serde_json::Value = resp
        .json()
        .await
        .map_err(|e| VisionError::InvalidResponse(e.to_string()))?;

    let content = envelope["choices"][0]["message"]["content"]
        .as_str()
        .unwrap_or("");

    if content.is_empty() {
        return Err(VisionError::EmptyContent);
    }

    Ok(content.to_string())
}
