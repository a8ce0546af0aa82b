//! Scripted `TextGenerator` for unit tests. Records every call it receives.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use super::{LlmError, TextGenerator};

pub enum Reply {
    Text(String),
    ApiError { status: u16, message: String },
    Empty,
}

pub struct ScriptedGenerator {
    reply: Reply,
    delay: Option<Duration>,
    calls: AtomicUsize,
    prompts: Mutex<Vec<(String, String)>>,
}

impl ScriptedGenerator {
    pub fn replying(text: &str) -> Self {
        Self::new(Reply::Text(text.to_string()))
    }

    pub fn failing(status: u16, message: &str) -> Self {
        Self::new(Reply::ApiError {
            status,
            message: message.to_string(),
        })
    }

    pub fn empty() -> Self {
        Self::new(Reply::Empty)
    }

    fn new(reply: Reply) -> Self {
        Self {
            reply,
            delay: None,
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Makes every call sleep before replying.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// `(system, prompt)` pairs in call order.
    pub fn prompts(&self) -> Vec<(String, String)> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    async fn complete(&self, system: &str, prompt: &str) -> Result<String, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts
            .lock()
            .unwrap()
            .push((system.to_string(), prompt.to_string()));

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        match &self.reply {
            Reply::Text(text) => Ok(text.clone()),
            Reply::ApiError { status, message } => Err(LlmError::Api {
                status: *status,
                message: message.clone(),
            }),
            Reply::Empty => Err(LlmError::EmptyContent),
        }
    }
}
