//! Revision sub-flow
//!
//! Tracks the single open batch of documents pulled out of the main set for
//! manual correction. Each batch carries a generation token so that effects
//! of a submission abandoned mid-flight cannot land on a batch opened
//! later.

use lexdoc_types::{Document, FileAttachment};

use crate::error::FlowError;

/// A document under manual correction plus its locally attached
/// replacement file. `file == None` means awaiting upload.
#[derive(Debug, Clone)]
pub struct RevisionDocument {
    pub document: Document,
    pub file: Option<FileAttachment>,
}

#[derive(Debug)]
struct Batch {
    generation: u64,
    documents: Vec<RevisionDocument>,
}

#[derive(Debug, Default)]
pub struct RevisionFlow {
    batch: Option<Batch>,
    generations: u64,
}

impl RevisionFlow {
    pub fn is_open(&self) -> bool {
        self.batch.is_some()
    }

    pub fn generation(&self) -> Option<u64> {
        self.batch.as_ref().map(|b| b.generation)
    }

    /// Open a batch with the given documents, or append to the batch that
    /// is already open. Returns the batch generation.
    pub fn open(&mut self, documents: Vec<Document>) -> u64 {
        let incoming = documents
            .into_iter()
            .map(|document| RevisionDocument {
                document,
                file: None,
            });
        match &mut self.batch {
            Some(batch) => {
                batch.documents.extend(incoming);
                batch.generation
            }
            None => {
                self.generations += 1;
                self.batch = Some(Batch {
                    generation: self.generations,
                    documents: incoming.collect(),
                });
                self.generations
            }
        }
    }

    pub fn documents(&self) -> &[RevisionDocument] {
        self.batch.as_ref().map(|b| b.documents.as_slice()).unwrap_or(&[])
    }

    pub fn ids(&self) -> Vec<String> {
        self.documents().iter().map(|d| d.document.id.clone()).collect()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.documents().iter().any(|d| d.document.id == id)
    }

    /// Set the replacement file for one document in the open batch.
    pub fn attach(&mut self, document_id: &str, file: FileAttachment) -> Result<(), FlowError> {
        let batch = self.batch.as_mut().ok_or(FlowError::NoOpenBatch)?;
        let entry = batch
            .documents
            .iter_mut()
            .find(|d| d.document.id == document_id)
            .ok_or_else(|| FlowError::NotInBatch(document_id.to_string()))?;
        entry.file = Some(file);
        Ok(())
    }

    pub fn missing_files(&self) -> usize {
        self.documents().iter().filter(|d| d.file.is_none()).count()
    }

    /// The (id, file) pairs to upload, or a refusal naming how many
    /// documents still have no file. Nothing is sent until this succeeds.
    pub fn ready_uploads(&self) -> Result<Vec<(String, &FileAttachment)>, FlowError> {
        let batch = self.batch.as_ref().ok_or(FlowError::NoOpenBatch)?;
        let missing = self.missing_files();
        if missing > 0 {
            return Err(FlowError::RevisionIncomplete { missing });
        }
        Ok(batch
            .documents
            .iter()
            .filter_map(|d| d.file.as_ref().map(|f| (d.document.id.clone(), f)))
            .collect())
    }

    /// Close the batch, handing its documents back for the main set.
    /// Attached files are dropped. Returns nothing when already idle.
    pub fn cancel(&mut self) -> Vec<Document> {
        match self.batch.take() {
            Some(batch) => batch.documents.into_iter().map(|d| d.document).collect(),
            None => Vec::new(),
        }
    }

    /// Close the batch only if it is still the one identified by
    /// `generation`. A submission that raced with a cancel-and-reopen must
    /// not close (or refresh on behalf of) the newer batch.
    pub fn close_if_current(&mut self, generation: u64) -> bool {
        if self.generation() == Some(generation) {
            self.batch = None;
            true
        } else {
            false
        }
    }
}
