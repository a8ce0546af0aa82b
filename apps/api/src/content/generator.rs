//! Content Generation — orchestrates one generation call.
//!
//! Flow: validate → build prompt → provider call (bounded, cancellable) → parse.
//!
//! Exactly one provider call per request. No retries, no caching.

use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::content::models::{ContentError, ContentRequest, ContentResult};
use crate::content::parser::parse_completion;
use crate::content::prompts::{build_content_prompt, CONTENT_SYSTEM};
use crate::llm_client::{LlmError, TextGenerator};

/// Default upper bound on a single provider call.
pub const DEFAULT_GENERATION_TIMEOUT: Duration = Duration::from_secs(30);

/// Turns a `ContentRequest` into a `ContentResult` using an injected provider.
///
/// Holds no mutable state; one instance is shared by all requests.
pub struct ContentGenerator {
    llm: Arc<dyn TextGenerator>,
    timeout: Duration,
}

impl ContentGenerator {
    pub fn new(llm: Arc<dyn TextGenerator>, timeout: Duration) -> Self {
        Self { llm, timeout }
    }

    /// Runs the generation pipeline.
    ///
    /// Validation happens before the provider is touched. If `cancel` fires while the
    /// provider call is pending, the call is dropped and `ContentError::Cancelled` is returned.
    pub async fn generate(
        &self,
        request: &ContentRequest,
        cancel: &CancellationToken,
    ) -> Result<ContentResult, ContentError> {
        request.validate()?;

        let prompt = build_content_prompt(request);
        info!(
            "Requesting {} for {} on {}",
            request.content_type, request.brand_name, request.platform
        );

        let call = tokio::time::timeout(self.timeout, self.llm.complete(CONTENT_SYSTEM, &prompt));

        let completion = tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                debug!("Dropping pending provider call");
                return Err(ContentError::Cancelled);
            }
            outcome = call => match outcome {
                Ok(result) => result?,
                Err(_) => return Err(LlmError::Timeout(self.timeout.as_secs()).into()),
            },
        };

        let result = parse_completion(&completion)?;
        info!(
            "Generated caption ({} chars) with {} hashtags",
            result.caption.chars().count(),
            result.hashtags.len()
        );

        Ok(result)
    }
}
