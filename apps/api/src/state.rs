use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::content::generator::ContentGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub generator: Arc<ContentGenerator>,
    /// Cancelled on shutdown; each request works on a child token.
    pub shutdown: CancellationToken,
}
