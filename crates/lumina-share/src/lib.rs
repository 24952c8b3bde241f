//! Stateless share-link codec.
//!
//! Serializes a full [`Document`] + [`DisplaySettings`] snapshot into a
//! compact token safe for a URL query parameter, and reverses it. The
//! pipeline is JSON → percent-encoding (URI-component set) → URL-safe
//! base64 without padding.
//!
//! Two token generations exist. Current tokens carry `{cv, settings}` and
//! use the URL-safe alphabet; legacy tokens (historically carried under a
//! single-letter query key) are standard-alphabet base64 over a
//! percent-encoded bare document. [`decode`] tries current first and falls
//! back to legacy, reporting which generation matched via
//! [`DecodedShare`].
//!
//! Decoding is all-or-nothing: any failure yields [`ShareError::Decode`],
//! never a partially populated document.

use base64::Engine;
use base64::prelude::{BASE64_STANDARD, BASE64_URL_SAFE_NO_PAD};
use lumina_model::{DisplaySettings, Document};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};
use serde::{Deserialize, Serialize};

mod label;

pub use label::share_label;

/// Tokens longer than this still work, but sharing becomes unreliable in
/// some browsers; [`ShareToken::oversized`] flags them.
pub const TOKEN_WARN_LENGTH: usize = 8000;

/// URI-component escape set: everything except alphanumerics and
/// `- _ . ! ~ * ' ( )`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Share codec failure.
#[derive(Debug, thiserror::Error)]
pub enum ShareError {
    /// Serialization failed; surface as a "could not generate link"
    /// outcome.
    #[error("could not generate share link")]
    Encode(#[source] serde_json::Error),
    /// The token failed base64, percent, or JSON decoding in both the
    /// current and legacy formats.
    #[error("invalid share token")]
    Decode,
}

/// An encoded share link token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShareToken {
    /// URL-safe token value for the query parameter.
    pub token: String,
    /// Short human-readable label; cosmetic only, never decoded.
    pub label: String,
    /// Set when the token exceeds [`TOKEN_WARN_LENGTH`]; a warning to the
    /// user, not an error.
    pub oversized: bool,
}

/// A decoded share token, tagged by the generation that matched.
#[derive(Clone, Debug, PartialEq)]
pub enum DecodedShare {
    /// Current format: document plus display settings.
    Current {
        document: Document,
        settings: DisplaySettings,
    },
    /// Legacy format: bare document, settings not carried.
    Legacy { document: Document },
}

impl DecodedShare {
    /// The decoded document, whichever generation produced it.
    #[must_use]
    pub fn into_document(self) -> Document {
        match self {
            Self::Current { document, .. } | Self::Legacy { document } => document,
        }
    }
}

#[derive(Serialize)]
struct EncodePayload<'a> {
    cv: &'a Document,
    settings: &'a DisplaySettings,
}

#[derive(Deserialize)]
struct DecodePayload {
    cv: Document,
    #[serde(default)]
    settings: DisplaySettings,
}

/// Encode a document + settings snapshot into a share token.
pub fn encode(doc: &Document, settings: &DisplaySettings) -> Result<ShareToken, ShareError> {
    let json = serde_json::to_string(&EncodePayload { cv: doc, settings })
        .map_err(ShareError::Encode)?;
    let escaped = utf8_percent_encode(&json, COMPONENT).to_string();
    let token = BASE64_URL_SAFE_NO_PAD.encode(escaped.as_bytes());
    let oversized = token.len() > TOKEN_WARN_LENGTH;
    if oversized {
        tracing::warn!(
            token_len = token.len(),
            "share token exceeds reliable URL length"
        );
    }
    Ok(ShareToken {
        label: share_label(doc),
        token,
        oversized,
    })
}

/// Decode a share token, trying the current format first, then legacy.
pub fn decode(token: &str) -> Result<DecodedShare, ShareError> {
    if let Some(decoded) = decode_current(token) {
        return Ok(decoded);
    }
    if let Some(document) = decode_legacy(token) {
        return Ok(DecodedShare::Legacy { document });
    }
    tracing::debug!("share token failed both current and legacy decoding");
    Err(ShareError::Decode)
}

fn decode_current(token: &str) -> Option<DecodedShare> {
    let bytes = BASE64_URL_SAFE_NO_PAD.decode(token).ok()?;
    let escaped = String::from_utf8(bytes).ok()?;
    let json = percent_decode_str(&escaped).decode_utf8().ok()?;
    let payload: DecodePayload = serde_json::from_str(&json).ok()?;
    Some(DecodedShare::Current {
        document: payload.cv,
        settings: payload.settings,
    })
}

fn decode_legacy(token: &str) -> Option<Document> {
    let bytes = BASE64_STANDARD.decode(token).ok()?;
    let escaped = String::from_utf8(bytes).ok()?;
    let json = percent_decode_str(&escaped).decode_utf8().ok()?;
    serde_json::from_str(&json).ok()
}
