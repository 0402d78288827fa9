//! HTTP client for the case-management document backend.
//!
//! Implements [`lexdoc_core::DocumentService`] over the backend's REST
//! endpoints. Corrected files travel as base64 JSON payloads; the e-signing
//! initiation is a bare POST whose acknowledgement only confirms receipt.

mod config;
mod models;

pub use config::{ClientConfig, ConfigError};

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use lexdoc_core::{DocumentService, ServiceError};
use lexdoc_types::{Document, FileAttachment};
use tracing::debug;

use crate::models::{ApproveRequest, RevisionUploadRequest};

/// REST-backed document service.
pub struct HttpDocumentService {
    http: reqwest::Client,
    config: ClientConfig,
}

impl HttpDocumentService {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.config.api_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn check(response: reqwest::Response) -> Result<reqwest::Response, ServiceError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(ServiceError::Rejected(format!("{status}: {body}")))
    }
}

fn transport(err: reqwest::Error) -> ServiceError {
    ServiceError::Transport(err.to_string())
}

#[async_trait]
impl DocumentService for HttpDocumentService {
    async fn list_documents(&self, work_id: &str) -> Result<Vec<Document>, ServiceError> {
        let url = self.endpoint(&format!("works/{work_id}/documents"));
        debug!("GET {url}");
        let response = self
            .authorize(self.http.get(&url))
            .send()
            .await
            .map_err(transport)?;
        let response = Self::check(response).await?;
        response
            .json::<Vec<Document>>()
            .await
            .map_err(|e| ServiceError::InvalidResponse(e.to_string()))
    }

    async fn convert_and_approve(
        &self,
        work_id: &str,
        document_ids: &[String],
    ) -> Result<(), ServiceError> {
        let url = self.endpoint(&format!("works/{work_id}/documents/approve"));
        debug!("POST {url} ({} document(s))", document_ids.len());
        let body = ApproveRequest {
            document_ids: document_ids.to_vec(),
        };
        let response = self
            .authorize(self.http.post(&url))
            .json(&body)
            .send()
            .await
            .map_err(transport)?;
        Self::check(response).await?;
        Ok(())
    }

    async fn upload_revision_file(
        &self,
        work_id: &str,
        document_id: &str,
        file: &FileAttachment,
    ) -> Result<(), ServiceError> {
        let url = self.endpoint(&format!("works/{work_id}/documents/{document_id}/revision"));
        debug!("POST {url} ({} bytes)", file.bytes.len());
        let body = RevisionUploadRequest {
            file_name: file.file_name.clone(),
            content_base64: BASE64.encode(&file.bytes),
        };
        let response = self
            .authorize(self.http.post(&url))
            .json(&body)
            .send()
            .await
            .map_err(transport)?;
        Self::check(response).await?;
        Ok(())
    }

    async fn initiate_digital_signature(&self, work_id: &str) -> Result<(), ServiceError> {
        let url = self.endpoint(&format!("works/{work_id}/signature/digital"));
        debug!("POST {url}");
        let response = self
            .authorize(self.http.post(&url))
            .send()
            .await
            .map_err(transport)?;
        Self::check(response).await?;
        Ok(())
    }

    async fn fetch_document(&self, url: &str) -> Result<Vec<u8>, ServiceError> {
        debug!("GET {url}");
        let response = self
            .authorize(self.http.get(url))
            .send()
            .await
            .map_err(transport)?;
        let response = Self::check(response).await?;
        let bytes = response.bytes().await.map_err(transport)?;
        Ok(bytes.to_vec())
    }
}
