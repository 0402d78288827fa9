//! Document set store
//!
//! The authoritative-for-the-session collection of a work's documents plus
//! the user's current grid selection. Only pending documents are
//! selectable; the store validates that rather than trusting the grid.

use std::collections::BTreeSet;

use lexdoc_types::Document;

use crate::error::FlowError;

#[derive(Debug, Default)]
pub struct DocumentSet {
    documents: Vec<Document>,
    selected: BTreeSet<String>,
}

impl DocumentSet {
    pub fn new(documents: Vec<Document>) -> Self {
        Self {
            documents,
            selected: BTreeSet::new(),
        }
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Document> {
        self.documents.iter().find(|d| d.id == id)
    }

    /// Documents flagged by the backend as needing manual correction.
    pub fn pending(&self) -> Vec<&Document> {
        self.documents.iter().filter(|d| d.pending_revision).collect()
    }

    pub fn pending_count(&self) -> usize {
        self.documents.iter().filter(|d| d.pending_revision).count()
    }

    /// Replace the whole set with a fresh fetch. The selection is dropped;
    /// it may reference documents that no longer exist or are no longer
    /// pending.
    pub fn replace(&mut self, documents: Vec<Document>) {
        self.documents = documents;
        self.selected.clear();
    }

    /// Record the checkbox selection. Every id must name a pending
    /// document; the whole call is rejected otherwise.
    pub fn select(&mut self, ids: &[String]) -> Result<(), FlowError> {
        for id in ids {
            let document = self
                .get(id)
                .ok_or_else(|| FlowError::UnknownDocument(id.clone()))?;
            if !document.pending_revision {
                return Err(FlowError::NotPending(id.clone()));
            }
        }
        self.selected = ids.iter().cloned().collect();
        Ok(())
    }

    pub fn selected(&self) -> Vec<String> {
        self.selected.iter().cloned().collect()
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }

    /// Remove and return the given documents (revision hand-off). Ids not
    /// present are ignored; callers validate membership beforehand.
    pub fn take(&mut self, ids: &[String]) -> Vec<Document> {
        let wanted: BTreeSet<&str> = ids.iter().map(String::as_str).collect();
        let all = std::mem::take(&mut self.documents);
        let (taken, kept): (Vec<_>, Vec<_>) = all
            .into_iter()
            .partition(|d| wanted.contains(d.id.as_str()));
        self.documents = kept;
        taken
    }

    /// Return documents from a cancelled revision batch, re-marked as
    /// pending.
    pub fn restore(&mut self, documents: Vec<Document>) {
        for mut document in documents {
            document.pending_revision = true;
            self.documents.push(document);
        }
    }
}
