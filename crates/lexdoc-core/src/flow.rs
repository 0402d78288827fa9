//! Approval workflow controller
//!
//! Owns step progression and the document collection for one work and
//! coordinates the revision and signature sub-flows against the remote
//! document service. All state-changing methods take `&mut self`, so a
//! second action cannot start while a network operation is outstanding.

use lexdoc_types::{Document, FileAttachment, WorkflowStep};
use tracing::{debug, info, warn};

use crate::documents::DocumentSet;
use crate::error::FlowError;
use crate::revision::{RevisionDocument, RevisionFlow};
use crate::service::DocumentService;
use crate::signature::{SignatureFlow, SignatureKind, SigningState};

pub struct ApprovalFlow<S> {
    service: S,
    work_id: String,
    step: WorkflowStep,
    documents: DocumentSet,
    revision: RevisionFlow,
    signature: SignatureFlow,
}

impl<S: DocumentService> ApprovalFlow<S> {
    /// Fetch the work's documents and start at the Review step.
    pub async fn load(service: S, work_id: impl Into<String>) -> Result<Self, FlowError> {
        let work_id = work_id.into();
        let documents = service.list_documents(&work_id).await?;
        info!("loaded {} document(s) for work {}", documents.len(), work_id);
        Ok(Self {
            service,
            work_id,
            step: WorkflowStep::Review,
            documents: DocumentSet::new(documents),
            revision: RevisionFlow::default(),
            signature: SignatureFlow::default(),
        })
    }

    /// Resume a work at the step the backend persisted for it.
    ///
    /// The persisted value is not trusted blindly: resuming into Signature
    /// re-checks the review completion guard against the freshly fetched
    /// set, and falls back to Review when documents are still pending.
    pub async fn resume(
        service: S,
        work_id: impl Into<String>,
        step: WorkflowStep,
    ) -> Result<Self, FlowError> {
        let mut flow = Self::load(service, work_id).await?;
        let pending = flow.documents.pending_count();
        flow.step = match step {
            WorkflowStep::Signature if pending > 0 => {
                warn!(
                    "work {} persisted at signature with {} pending document(s), resuming at review",
                    flow.work_id, pending
                );
                WorkflowStep::Review
            }
            other => other,
        };
        Ok(flow)
    }

    pub fn work_id(&self) -> &str {
        &self.work_id
    }

    pub fn step(&self) -> WorkflowStep {
        self.step
    }

    pub fn documents(&self) -> &[Document] {
        self.documents.documents()
    }

    pub fn pending_documents(&self) -> Vec<&Document> {
        self.documents.pending()
    }

    pub fn selected(&self) -> Vec<String> {
        self.documents.selected()
    }

    pub fn revision_open(&self) -> bool {
        self.revision.is_open()
    }

    pub fn revision_documents(&self) -> &[RevisionDocument] {
        self.revision.documents()
    }

    pub fn signature_kind(&self) -> Option<SignatureKind> {
        self.signature.kind()
    }

    pub fn signing_state(&self) -> SigningState {
        self.signature.state()
    }

    /// True when the review step is complete and the flow may move on to
    /// signature: nothing pending and no revision batch open.
    pub fn can_advance_to_signature(&self) -> bool {
        self.step == WorkflowStep::Review
            && self.documents.pending_count() == 0
            && !self.revision.is_open()
    }

    /// Re-fetch the document set from the backend. Server-side status
    /// changes are picked up this way rather than by patching locally.
    pub async fn refresh(&mut self) -> Result<(), FlowError> {
        let documents = self.service.list_documents(&self.work_id).await?;
        self.documents.replace(documents);
        Ok(())
    }

    fn ensure_step(&self, expected: WorkflowStep) -> Result<(), FlowError> {
        if self.step == expected {
            Ok(())
        } else {
            Err(FlowError::WrongStep(self.step))
        }
    }

    /// Record the checkbox selection in the review grid. Only pending
    /// documents are selectable.
    pub fn select(&mut self, ids: &[String]) -> Result<(), FlowError> {
        self.ensure_step(WorkflowStep::Review)?;
        self.documents.select(ids)
    }

    /// Quick approval: convert and approve the selected documents as-is.
    /// On success the set is re-fetched; on failure it is left untouched.
    pub async fn approve_selected(&mut self) -> Result<(), FlowError> {
        self.ensure_step(WorkflowStep::Review)?;
        let ids = self.documents.selected();
        if ids.is_empty() {
            return Err(FlowError::EmptySelection);
        }
        self.service.convert_and_approve(&self.work_id, &ids).await?;
        info!("approved {} document(s) for work {}", ids.len(), self.work_id);
        self.refresh().await
    }

    /// Pull the given documents out of the main set for manual correction.
    ///
    /// The ids must be a non-empty subset of the pending documents
    /// currently selected in the grid. Calling again while a batch is open
    /// appends to it; there is only ever one open batch.
    pub fn begin_revision(&mut self, ids: &[String]) -> Result<(), FlowError> {
        self.ensure_step(WorkflowStep::Review)?;
        if ids.is_empty() {
            return Err(FlowError::EmptySelection);
        }
        for id in ids {
            let document = self
                .documents
                .get(id)
                .ok_or_else(|| FlowError::UnknownDocument(id.clone()))?;
            if !document.pending_revision {
                return Err(FlowError::NotPending(id.clone()));
            }
            if !self.documents.is_selected(id) {
                return Err(FlowError::NotSelected(id.clone()));
            }
        }
        let taken = self.documents.take(ids);
        self.documents.clear_selection();
        let generation = self.revision.open(taken);
        debug!(
            "revision batch {} holds {} document(s)",
            generation,
            self.revision.documents().len()
        );
        Ok(())
    }

    /// Attach the corrected file for one document in the open batch.
    pub fn attach_file(&mut self, document_id: &str, file: FileAttachment) -> Result<(), FlowError> {
        self.ensure_step(WorkflowStep::Review)?;
        self.revision.attach(document_id, file)
    }

    /// Abandon the open batch, returning its documents to the main set as
    /// pending again. Attached files are discarded. No-op when idle.
    pub fn cancel_revision(&mut self) {
        let documents = self.revision.cancel();
        if !documents.is_empty() {
            info!(
                "revision cancelled, {} document(s) back to pending",
                documents.len()
            );
            self.documents.restore(documents);
        }
    }

    /// Upload every corrected file in the open batch, then approve the
    /// whole batch in one call.
    ///
    /// Refused before any network traffic unless every document has a
    /// file. Uploads run concurrently; the approve call is only issued
    /// once all of them have succeeded. On any failure the batch stays
    /// open with its files attached and the submit can be retried, which
    /// re-uploads every file.
    pub async fn submit_revision(&mut self) -> Result<(), FlowError> {
        self.ensure_step(WorkflowStep::Review)?;
        let generation = self.revision.generation().ok_or(FlowError::NoOpenBatch)?;

        let ids: Vec<String> = {
            let uploads = self.revision.ready_uploads()?;
            let service = &self.service;
            let work_id = self.work_id.as_str();
            futures::future::try_join_all(uploads.iter().map(|(id, file)| async move {
                service
                    .upload_revision_file(work_id, id, file)
                    .await
                    .map_err(|source| FlowError::Upload {
                        document_id: id.clone(),
                        source,
                    })
            }))
            .await?;
            uploads.into_iter().map(|(id, _)| id).collect()
        };

        self.service.convert_and_approve(&self.work_id, &ids).await?;

        // Effects only apply if this is still the batch that was submitted.
        if self.revision.close_if_current(generation) {
            info!(
                "revision batch submitted for work {} ({} document(s))",
                self.work_id,
                ids.len()
            );
            self.refresh().await?;
        }
        Ok(())
    }

    /// Move on to the signature step. Requires every document approved and
    /// the revision sub-flow idle.
    pub fn advance_to_signature(&mut self) -> Result<(), FlowError> {
        self.ensure_step(WorkflowStep::Review)?;
        let pending = self.documents.pending_count();
        if pending > 0 {
            return Err(FlowError::DocumentsPending { pending });
        }
        if self.revision.is_open() {
            return Err(FlowError::RevisionOpen);
        }
        self.step = WorkflowStep::Signature;
        info!("work {} advanced to signature", self.work_id);
        Ok(())
    }

    /// Step back from Signature to Review. Destructive: discards the
    /// chosen signature type and any in-progress signing attempt. The host
    /// is expected to confirm with the user first. Nothing is sent to the
    /// backend.
    pub fn return_to_review(&mut self) -> Result<(), FlowError> {
        self.ensure_step(WorkflowStep::Signature)?;
        self.signature.reset();
        self.step = WorkflowStep::Review;
        info!("work {} returned to review", self.work_id);
        Ok(())
    }

    /// Pick digital or traditional signature.
    pub fn choose_signature(&mut self, kind: SignatureKind) -> Result<(), FlowError> {
        self.ensure_step(WorkflowStep::Signature)?;
        self.signature.choose(kind)
    }

    /// Start the signing round trip for the chosen type.
    ///
    /// Digital issues one fire-and-forget request to the e-signing
    /// integration; the signer hears back out-of-band. Traditional is a
    /// recognized but inert branch awaiting product definition, so
    /// beginning it changes nothing.
    pub async fn begin_signature(&mut self) -> Result<(), FlowError> {
        self.ensure_step(WorkflowStep::Signature)?;
        match self.signature.ensure_can_begin()? {
            SignatureKind::Digital => {
                self.service.initiate_digital_signature(&self.work_id).await?;
                self.signature.mark_signing();
                info!("digital signature initiated for work {}", self.work_id);
            }
            SignatureKind::Traditional => {
                debug!(
                    "traditional signature selected for work {}, nothing to initiate",
                    self.work_id
                );
            }
        }
        Ok(())
    }

    /// Abandon the current signing attempt and clear the chosen type so
    /// the selector shows again. Local only; an already-issued e-signing
    /// request is not recalled.
    pub fn cancel_signature(&mut self) {
        self.signature.cancel();
    }

    /// Acknowledge that the signature round trip finished. The trigger is
    /// external (for example a backend status refresh); the flow itself
    /// never polls. Moves the workflow to Finalized.
    pub fn signature_completed(&mut self) -> Result<(), FlowError> {
        self.ensure_step(WorkflowStep::Signature)?;
        self.signature.complete()?;
        self.step = WorkflowStep::Finalized;
        info!("work {} finalized", self.work_id);
        Ok(())
    }

    /// Fetch a document artifact for display or download.
    pub async fn open_document(&self, url: &str) -> Result<Vec<u8>, FlowError> {
        Ok(self.service.fetch_document(url).await?)
    }
}
