//! Shared types for the lexdoc document approval workflow.
//!
//! Everything here is plain data: the document model exchanged with the
//! case-management backend and the pure formatting helpers used when
//! rendering documents, clients and statuses.

pub mod format;
pub mod types;

pub use types::{Document, DocumentKind, FileAttachment, WorkflowStep};
