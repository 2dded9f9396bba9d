//! Session identity for presence counting.
//!
//! A session is identified by the client's network origin plus a fingerprint
//! of its environment (the user agent). Distinct users behind one origin with
//! identical environments collapse into a single session; that is accepted for
//! a best-effort online count and must not be relied on for anything else.

use std::fmt;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Opaque session identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for SessionId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for SessionId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Derives a session id from where a client connects from and what it runs.
pub trait SessionFingerprint: Send + Sync {
    fn session_id(&self, origin: &str, environment: &str) -> SessionId;
}

/// `{origin}-{first 16 hex digits of sha256(environment)}`.
#[derive(Debug, Default, Clone, Copy)]
pub struct Sha256Fingerprint;

impl SessionFingerprint for Sha256Fingerprint {
    fn session_id(&self, origin: &str, environment: &str) -> SessionId {
        let mut hasher = Sha256::new();
        hasher.update(environment.as_bytes());
        let digest = format!("{:x}", hasher.finalize());
        SessionId(format!("{}-{}", origin, &digest[..16]))
    }
}
