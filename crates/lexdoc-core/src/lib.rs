//! Document approval workflow for legal case files.
//!
//! One [`ApprovalFlow`] drives the approval of a work's documents through
//! three steps: review (quick approval and manual revision), signature
//! (digital or traditional), and the finalized view. The remote document
//! store is an external collaborator behind the [`DocumentService`] trait;
//! the flow never mutates documents locally on its own authority and
//! re-fetches the set after every server-side change.

pub mod documents;
pub mod error;
pub mod flow;
pub mod revision;
pub mod service;
pub mod signature;

pub use documents::DocumentSet;
pub use error::FlowError;
pub use flow::ApprovalFlow;
pub use revision::{RevisionDocument, RevisionFlow};
pub use service::{DocumentService, ServiceError};
pub use signature::{SignatureFlow, SignatureKind, SigningState};
