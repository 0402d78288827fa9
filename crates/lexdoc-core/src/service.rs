//! Remote document service collaborator

use async_trait::async_trait;
use lexdoc_types::{Document, FileAttachment};
use std::sync::Arc;
use thiserror::Error;

/// Failure of a call to the remote document service.
///
/// All variants are transient from the workflow's point of view: the
/// triggering action can be retried without repair work on the client.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("backend rejected the operation: {0}")]
    Rejected(String),

    #[error("unexpected response: {0}")]
    InvalidResponse(String),
}

/// The backend operations the approval workflow consumes.
///
/// The workflow owns none of this data; documents are created server-side
/// and the client only ever asks for status changes and re-fetches.
#[async_trait]
pub trait DocumentService: Send + Sync {
    /// Fetch the full document set for a work.
    async fn list_documents(&self, work_id: &str) -> Result<Vec<Document>, ServiceError>;

    /// Convert the given documents to their final PDF form and mark them
    /// approved. One call covers a whole batch.
    async fn convert_and_approve(
        &self,
        work_id: &str,
        document_ids: &[String],
    ) -> Result<(), ServiceError>;

    /// Upload the corrected replacement file for one document.
    async fn upload_revision_file(
        &self,
        work_id: &str,
        document_id: &str,
        file: &FileAttachment,
    ) -> Result<(), ServiceError>;

    /// Kick off the e-signing round trip for the work. Fire-and-forget:
    /// the acknowledgement only confirms the request was accepted, the
    /// signer is notified out-of-band.
    async fn initiate_digital_signature(&self, work_id: &str) -> Result<(), ServiceError>;

    /// Download a document artifact for display.
    async fn fetch_document(&self, url: &str) -> Result<Vec<u8>, ServiceError>;
}

#[async_trait]
impl<S> DocumentService for Arc<S>
where
    S: DocumentService + ?Sized,
{
    async fn list_documents(&self, work_id: &str) -> Result<Vec<Document>, ServiceError> {
        (**self).list_documents(work_id).await
    }

    async fn convert_and_approve(
        &self,
        work_id: &str,
        document_ids: &[String],
    ) -> Result<(), ServiceError> {
        (**self).convert_and_approve(work_id, document_ids).await
    }

    async fn upload_revision_file(
        &self,
        work_id: &str,
        document_id: &str,
        file: &FileAttachment,
    ) -> Result<(), ServiceError> {
        (**self)
            .upload_revision_file(work_id, document_id, file)
            .await
    }

    async fn initiate_digital_signature(&self, work_id: &str) -> Result<(), ServiceError> {
        (**self).initiate_digital_signature(work_id).await
    }

    async fn fetch_document(&self, url: &str) -> Result<Vec<u8>, ServiceError> {
        (**self).fetch_document(url).await
    }
}
