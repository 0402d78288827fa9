//! Data models for the document approval workflow

use serde::{Deserialize, Serialize};

/// A document belonging to a legal case ("work").
///
/// Documents are created and owned by the backend; the client never
/// originates an id. `status` is a free-text label from the backend and is
/// not interpreted by the workflow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub kind: DocumentKind,
    pub url: String,
    pub original_file_url: Option<String>,
    pub status: String,
    pub pending_revision: bool,
}

/// Document category tag. Display-only; workflow logic never branches on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    Procuration,
    Waiver,
    DeficiencyStatement,
    Contract,
    Other,
}

impl DocumentKind {
    /// Portuguese display label for the document grid.
    pub fn label(&self) -> &'static str {
        match self {
            DocumentKind::Procuration => "Procuração",
            DocumentKind::Waiver => "Termo de Renúncia",
            DocumentKind::DeficiencyStatement => "Declaração de Hipossuficiência",
            DocumentKind::Contract => "Contrato",
            DocumentKind::Other => "Outro",
        }
    }
}

/// Phase of the document approval workflow for one work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowStep {
    Review,
    Signature,
    Finalized,
}

impl WorkflowStep {
    /// Numeric index as persisted by the backend (0, 1, 2).
    pub fn index(self) -> u8 {
        match self {
            WorkflowStep::Review => 0,
            WorkflowStep::Signature => 1,
            WorkflowStep::Finalized => 2,
        }
    }

    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(WorkflowStep::Review),
            1 => Some(WorkflowStep::Signature),
            2 => Some(WorkflowStep::Finalized),
            _ => None,
        }
    }
}

impl std::fmt::Display for WorkflowStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WorkflowStep::Review => write!(f, "review"),
            WorkflowStep::Signature => write!(f, "signature"),
            WorkflowStep::Finalized => write!(f, "finalized"),
        }
    }
}

/// A locally-selected replacement file for a document under revision.
///
/// Lives only in client memory until uploaded; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileAttachment {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl FileAttachment {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }
}
