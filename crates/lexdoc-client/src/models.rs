//! Wire payloads for the case-management API

use serde::Serialize;

/// Body of the convert-and-approve call. One request covers a whole batch.
#[derive(Debug, Clone, Serialize)]
pub struct ApproveRequest {
    pub document_ids: Vec<String>,
}

/// Corrected file for one document, shipped as base64 JSON.
#[derive(Debug, Clone, Serialize)]
pub struct RevisionUploadRequest {
    pub file_name: String,
    pub content_base64: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_approve_request_wire_shape() {
        let body = ApproveRequest {
            document_ids: vec!["a".into(), "b".into()],
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "document_ids": ["a", "b"] })
        );
    }

    #[test]
    fn test_revision_upload_wire_shape() {
        let body = RevisionUploadRequest {
            file_name: "procuracao.pdf".into(),
            content_base64: "JVBERi0=".into(),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "file_name": "procuracao.pdf",
                "content_base64": "JVBERi0=",
            })
        );
    }
}
