//! Signature sub-flow
//!
//! Active only in the Signature step. The user first picks how the work
//! will be signed; the digital branch drives a fire-and-forget e-signing
//! round trip, the traditional branch is recognized but inert until product
//! defines it.

use crate::error::FlowError;

/// How the signature phase will be carried out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignatureKind {
    Digital,
    Traditional,
}

/// State of the current signing attempt. Cancelling an attempt returns the
/// machine to Idle with the kind cleared, so an abandoned attempt leaves no
/// residue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SigningState {
    #[default]
    Idle,
    Signing,
    Completed,
}

#[derive(Debug, Default)]
pub struct SignatureFlow {
    kind: Option<SignatureKind>,
    state: SigningState,
}

impl SignatureFlow {
    /// `None` until the type selector has been used; cancelling resets it.
    pub fn kind(&self) -> Option<SignatureKind> {
        self.kind
    }

    pub fn state(&self) -> SigningState {
        self.state
    }

    /// Pick the signature type and start a fresh attempt.
    pub fn choose(&mut self, kind: SignatureKind) -> Result<(), FlowError> {
        if self.state == SigningState::Signing {
            return Err(FlowError::AlreadySigning);
        }
        self.kind = Some(kind);
        self.state = SigningState::Idle;
        Ok(())
    }

    /// Guard for starting a signing round trip. Does not transition: the
    /// controller only flips to Signing after the outbound call succeeds,
    /// so a failed call leaves the attempt retriable from Idle.
    pub fn ensure_can_begin(&self) -> Result<SignatureKind, FlowError> {
        let kind = self.kind.ok_or(FlowError::NoSignatureKind)?;
        if self.state == SigningState::Signing {
            return Err(FlowError::AlreadySigning);
        }
        Ok(kind)
    }

    pub fn mark_signing(&mut self) {
        self.state = SigningState::Signing;
    }

    /// Abandon the current attempt and re-reveal the type selector. Local
    /// only; nothing is recalled server-side.
    pub fn cancel(&mut self) {
        self.state = SigningState::Idle;
        self.kind = None;
    }

    /// Record the externally-notified completion of the round trip.
    pub fn complete(&mut self) -> Result<(), FlowError> {
        if self.kind.is_none() {
            return Err(FlowError::NoSignatureKind);
        }
        self.state = SigningState::Completed;
        Ok(())
    }

    /// Full reset, used when stepping back to Review.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
