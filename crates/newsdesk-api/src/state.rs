//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use newsdesk_auth::{Authenticator, JwtDecoder, JwtEncoder, JwtPrincipalResolver, PasswordHasher};
use newsdesk_core::config::AppConfig;
use newsdesk_core::traits::StorageProvider;
use newsdesk_database::RecordStore;
use newsdesk_service::{ArticleService, AttachmentService, CascadeDeleter, MutationGate};

/// Everything a handler may need, cheap to clone.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Record store (PostgreSQL or in-memory).
    pub records: RecordStore,
    /// Where attachment bytes are written.
    pub storage: Arc<dyn StorageProvider>,
    /// Gate for every mutating request.
    pub gate: MutationGate,
    /// Username/password login.
    pub authenticator: Arc<Authenticator>,
    /// Article operations.
    pub article_service: Arc<ArticleService>,
    /// Attachment uploads.
    pub attachment_service: Arc<AttachmentService>,
}

impl AppState {
    /// Wire services over an initialized record store and storage provider.
    pub fn new(config: AppConfig, records: RecordStore, storage: Arc<dyn StorageProvider>) -> Self {
        let hasher = PasswordHasher::new();
        let encoder = JwtEncoder::new(&config.auth);
        let decoder = JwtDecoder::new(&config.auth);

        let resolver = JwtPrincipalResolver::new(decoder, records.principals());
        let gate = MutationGate::new(Arc::new(resolver));
        let authenticator = Arc::new(Authenticator::new(records.principals(), hasher, encoder));

        let cascade = CascadeDeleter::new(records.articles(), Arc::clone(&storage));
        let article_service = Arc::new(ArticleService::new(
            records.articles(),
            records.attachments(),
            cascade,
        ));
        let attachment_service = Arc::new(AttachmentService::new(
            records.articles(),
            records.attachments(),
            Arc::clone(&storage),
        ));

        Self {
            config: Arc::new(config),
            records,
            storage,
            gate,
            authenticator,
            article_service,
            attachment_service,
        }
    }
}
