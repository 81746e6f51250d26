use serde::Serialize;
use std::time::Duration;

/// One visually identified item in the uploaded image.
///
/// Every field is always populated: the parser substitutes defaults for
/// anything the model omitted or mistyped, so consumers never see a
/// partial record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetectedObject {
    /// Short category, free text from the model.
    pub label: String,
    /// Longer free-text description.
    pub description: String,
    /// Model confidence, nominally in [0,1]; not clamped.
    pub confidence: f64,
    /// Normalized top-left x of the bounding box.
    pub x: f64,
    /// Normalized top-left y of the bounding box.
    pub y: f64,
    /// Normalized box width.
    pub w: f64,
    /// Normalized box height.
    pub h: f64,
}

/// Validated output of one analysis call.
///
/// Constructed fresh per request and discarded once the response is
/// sent; nothing is shared across requests.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AnalysisResult {
    /// Detected objects, in the order the model emitted them.
    pub objects: Vec<DetectedObject>,
    /// Model-reported caveats (e.g., "could not distinguish X from Y").
    pub warnings: Vec<String>,
}

/// Configuration for the vision provider client.
#[derive(Debug, Clone)]
pub struct VisionConfig {
    /// Provider API base (e.g., "https://api.openai.com/v1")
    pub endpoint: String,
    /// Bearer credential for the provider.
    pub api_key: String,
    /// Vision model name (e.g., "gpt-4o")
    pub model: String,
    /// Per-request timeout (default: 60s)
    pub timeout: Duration,
}

impl VisionConfig {
    /// Create a config with the given API key and default provider settings.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            endpoint: "https://api.openai.com/v1".to_string(),
            api_key: api_key.into(),
            model: "gpt-4o".to_string(),
            timeout: Duration::from_secs(60),
        }
    }

    /// Set the provider API base.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set the vision model name.
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the per-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
