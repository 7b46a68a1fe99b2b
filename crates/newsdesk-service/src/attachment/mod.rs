//! Attachment uploads.

pub mod upload;

pub use upload::AttachmentService;
