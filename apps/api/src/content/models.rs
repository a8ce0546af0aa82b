//! Wire types for the content generation endpoint and the error taxonomy of the pipeline.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::llm_client::LlmError;

/// Brand and platform parameters for one generation call.
///
/// Missing fields deserialize to empty strings so they surface as
/// `ContentError::Validation` rather than a body rejection.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContentRequest {
    pub brand_name: String,
    pub brand_description: String,
    pub platform: String,
    pub content_type: String,
    pub tone: String,
}

/// Structured content parsed out of a single provider completion.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentResult {
    pub caption: String,
    pub hashtags: Vec<String>,
    pub image_prompt: String,
}

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Generation failed: {0}")]
    Generation(#[from] LlmError),

    #[error("Unparseable completion: {0}")]
    Parse(String),

    #[error("Generation cancelled")]
    Cancelled,
}

impl ContentError {
    /// Stable identifier used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            ContentError::Validation(_) => "VALIDATION_ERROR",
            ContentError::Generation(_) => "GENERATION_ERROR",
            ContentError::Parse(_) => "PARSE_ERROR",
            ContentError::Cancelled => "CANCELLED",
        }
    }
}

impl ContentRequest {
    /// Rejects the request if any field is empty after trimming.
    pub fn validate(&self) -> Result<(), ContentError> {
        let fields = [
            ("brandName", &self.brand_name),
            ("brandDescription", &self.brand_description),
            ("platform", &self.platform),
            ("contentType", &self.content_type),
            ("tone", &self.tone),
        ];

        let missing: Vec<&str> = fields
            .iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(name, _)| *name)
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(ContentError::Validation(format!(
                "missing required fields: {}",
                missing.join(", ")
            )))
        }
    }
}
