//! PostgreSQL implementations of the record store traits.

pub mod article;
pub mod attachment;
pub mod principal;

pub use article::ArticleRepository;
pub use attachment::AttachmentRepository;
pub use principal::PrincipalRepository;

/// Name of the constraint violated by a duplicate storage path.
pub(crate) const STORAGE_PATH_UNIQUE: &str = "attachments_storage_path_key";
