use std::sync::Arc;

use crate::config::Config;
use crate::documents::TextExtractor;
use crate::jobs::repository::JobRepository;
use crate::matching::service::MatchingService;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Job collection; the same repository the matcher reads from.
    pub jobs: Arc<dyn JobRepository>,
    pub matcher: MatchingService,
    /// Pluggable document reader. Default: PdfTextExtractor.
    pub text_extractor: Arc<dyn TextExtractor>,
}
