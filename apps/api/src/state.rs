use std::sync::Arc;

use crate::config::Config;
use crate::text_generation::TextGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
/// The analysis engine is stateless; only the writing assistants use `generator`.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable text generator. Default: OfflineGenerator, which always falls back.
    pub generator: Arc<dyn TextGenerator>,
}
