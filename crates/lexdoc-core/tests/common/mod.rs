//! Shared in-memory document service double for workflow tests.
#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::Mutex;

use async_trait::async_trait;
use lexdoc_core::{DocumentService, ServiceError};
use lexdoc_types::{Document, DocumentKind, FileAttachment};

/// Backend call observed by the double, in invocation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    List,
    Approve(Vec<String>),
    Upload {
        document_id: String,
        file_name: String,
    },
    InitiateSignature,
    Fetch(String),
}

#[derive(Default)]
pub struct ServiceState {
    pub documents: Vec<Document>,
    pub calls: Vec<Call>,
    pub fail_uploads_for: HashSet<String>,
    pub fail_approve: bool,
    pub fail_signature: bool,
}

/// Scripted stand-in for the case-management backend. Records every call
/// and simulates the server-side status change on approval so that a
/// refresh observes it.
#[derive(Default)]
pub struct ScriptedService {
    state: Mutex<ServiceState>,
}

impl ScriptedService {
    pub fn with_documents(documents: Vec<Document>) -> Self {
        Self {
            state: Mutex::new(ServiceState {
                documents,
                ..ServiceState::default()
            }),
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn approve_calls(&self) -> Vec<Vec<String>> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::Approve(ids) => Some(ids),
                _ => None,
            })
            .collect()
    }

    pub fn upload_calls(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::Upload { document_id, .. } => Some(document_id),
                _ => None,
            })
            .collect()
    }

    pub fn fail_upload_for(&self, document_id: &str) {
        self.state
            .lock()
            .unwrap()
            .fail_uploads_for
            .insert(document_id.to_string());
    }

    pub fn clear_upload_failures(&self) {
        self.state.lock().unwrap().fail_uploads_for.clear();
    }

    pub fn set_fail_approve(&self, fail: bool) {
        self.state.lock().unwrap().fail_approve = fail;
    }

    pub fn set_fail_signature(&self, fail: bool) {
        self.state.lock().unwrap().fail_signature = fail;
    }
}

#[async_trait]
impl DocumentService for ScriptedService {
    async fn list_documents(&self, _work_id: &str) -> Result<Vec<Document>, ServiceError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call::List);
        Ok(state.documents.clone())
    }

    async fn convert_and_approve(
        &self,
        _work_id: &str,
        document_ids: &[String],
    ) -> Result<(), ServiceError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call::Approve(document_ids.to_vec()));
        if state.fail_approve {
            return Err(ServiceError::Transport(
                "approval service unavailable".into(),
            ));
        }
        for document in &mut state.documents {
            if document_ids.contains(&document.id) {
                document.pending_revision = false;
                document.status = "approved".to_string();
            }
        }
        Ok(())
    }

    async fn upload_revision_file(
        &self,
        _work_id: &str,
        document_id: &str,
        file: &FileAttachment,
    ) -> Result<(), ServiceError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call::Upload {
            document_id: document_id.to_string(),
            file_name: file.file_name.clone(),
        });
        if state.fail_uploads_for.contains(document_id) {
            return Err(ServiceError::Transport(format!(
                "upload refused for {document_id}"
            )));
        }
        Ok(())
    }

    async fn initiate_digital_signature(&self, _work_id: &str) -> Result<(), ServiceError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call::InitiateSignature);
        if state.fail_signature {
            return Err(ServiceError::Transport("e-signing gateway unavailable".into()));
        }
        Ok(())
    }

    async fn fetch_document(&self, url: &str) -> Result<Vec<u8>, ServiceError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call::Fetch(url.to_string()));
        Ok(b"%PDF-1.7".to_vec())
    }
}

pub fn doc(id: &str, pending: bool) -> Document {
    Document {
        id: id.to_string(),
        kind: DocumentKind::Procuration,
        url: format!("https://files.example/{id}.pdf"),
        original_file_url: None,
        status: if pending {
            "pending_revision"
        } else {
            "generated"
        }
        .to_string(),
        pending_revision: pending,
    }
}

pub fn attachment(name: &str) -> FileAttachment {
    FileAttachment::new(name, b"%PDF-1.7 corrected".to_vec())
}

/// Render workflow logs during tests when RUST_LOG is set.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}
