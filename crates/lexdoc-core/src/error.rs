//! Error types for the approval workflow

use lexdoc_types::WorkflowStep;
use thiserror::Error;

use crate::service::ServiceError;

/// Everything that can go wrong while driving the workflow.
///
/// Two families: local precondition violations, which are rejected before
/// any network traffic and should surface as a warning dialog, and service
/// failures, which leave the workflow state untouched and can be retried.
#[derive(Debug, Error)]
pub enum FlowError {
    #[error("operation not available in the {0} step")]
    WrongStep(WorkflowStep),

    #[error("no documents selected")]
    EmptySelection,

    #[error("document {0} is not pending revision")]
    NotPending(String),

    #[error("document {0} is not selected")]
    NotSelected(String),

    #[error("unknown document: {0}")]
    UnknownDocument(String),

    #[error("no revision batch is open")]
    NoOpenBatch,

    #[error("document {0} is not part of the open revision batch")]
    NotInBatch(String),

    #[error("{missing} document(s) in the revision batch still need a corrected file")]
    RevisionIncomplete { missing: usize },

    #[error("{pending} document(s) are still pending revision")]
    DocumentsPending { pending: usize },

    #[error("a revision batch is still open")]
    RevisionOpen,

    #[error("no signature type selected")]
    NoSignatureKind,

    #[error("a signature attempt is already in progress")]
    AlreadySigning,

    #[error("uploading the corrected file for document {document_id} failed: {source}")]
    Upload {
        document_id: String,
        #[source]
        source: ServiceError,
    },

    #[error(transparent)]
    Service(#[from] ServiceError),
}

impl FlowError {
    /// True for failures of the remote service, where retrying the same
    /// action is the expected recovery. Precondition violations return
    /// false; the caller has to change something first.
    pub fn is_retriable(&self) -> bool {
        matches!(self, FlowError::Upload { .. } | FlowError::Service(_))
    }
}
