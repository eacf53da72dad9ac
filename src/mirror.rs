//! Diagnostic session mirror
//!
//! The session id may be mirrored into a local key/value store so that a
//! crashed or misbehaving client can be correlated with server-side logs.
//! The mirror is strictly write-only from the client's perspective: it is
//! never read back and session continuity never depends on it.

use crate::error::{ChatlingError, Result};
use crate::session::Session;
use directories::ProjectDirs;
use std::path::PathBuf;

/// Write-only mirror of the session identity
pub struct SessionMirror {
    db: sled::Db,
}

impl SessionMirror {
    /// Open the mirror in the user's data directory
    ///
    /// The path can be overridden with the `CHATLING_MIRROR_DB`
    /// environment variable, which makes it easy to point the binary at
    /// a scratch location without changing the data dir.
    ///
    /// # Errors
    ///
    /// Returns error if the data directory cannot be determined or the
    /// store cannot be opened
    pub fn open() -> Result<Self> {
        if let Ok(override_path) = std::env::var("CHATLING_MIRROR_DB") {
            return Self::open_at(override_path);
        }

        let proj_dirs = ProjectDirs::from("com", "xbcsmith", "chatling")
            .ok_or_else(|| ChatlingError::Mirror("Could not determine data directory".into()))?;

        let db_path = proj_dirs.data_dir().join("mirror");
        Self::open_at(db_path)
    }

    /// Open the mirror at the specified path
    ///
    /// This is primarily useful for tests where the default application
    /// data directory is not desirable.
    ///
    /// # Arguments
    ///
    /// * `path` - Directory for the store
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use chatling::mirror::SessionMirror;
    ///
    /// let mirror = SessionMirror::open_at("/tmp/chatling-mirror").unwrap();
    /// ```
    pub fn open_at<P: Into<PathBuf>>(path: P) -> Result<Self> {
        let path = path.into();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| ChatlingError::Mirror(format!("Failed to create data dir: {}", e)))?;
        }

        let db = sled::open(&path)
            .map_err(|e| ChatlingError::Mirror(format!("Failed to open store: {}", e)))?;

        tracing::debug!("Opened session mirror at {}", path.display());
        Ok(Self { db })
    }

    /// Record the session identity
    ///
    /// Stores the creation time under the session id. Mirror failures are
    /// reported but callers are expected to log and continue; diagnostics
    /// must never break the chat.
    ///
    /// # Arguments
    ///
    /// * `session` - The session to mirror
    pub fn record(&self, session: &Session) -> Result<()> {
        self.db
            .insert(
                session.id.as_bytes(),
                session.created_at.to_rfc3339().as_bytes(),
            )
            .map_err(|e| ChatlingError::Mirror(format!("Failed to write session: {}", e)))?;
        self.db
            .flush()
            .map_err(|e| ChatlingError::Mirror(format!("Failed to flush store: {}", e)))?;

        tracing::debug!("Mirrored session {}", session.id);
        Ok(())
    }

    /// Number of sessions recorded in this store
    ///
    /// Exists for tests and offline inspection; the client itself never
    /// reads the mirror.
    pub fn len(&self) -> usize {
        self.db.len()
    }

    /// Returns true if no sessions are recorded
    pub fn is_empty(&self) -> bool {
        self.db.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_open_at_and_record() {
        let dir = TempDir::new().unwrap();
        let mirror = SessionMirror::open_at(dir.path().join("mirror")).unwrap();
        assert!(mirror.is_empty());

        let session = Session::new();
        mirror.record(&session).unwrap();
        assert_eq!(mirror.len(), 1);
    }

    #[test]
    fn test_record_is_idempotent_per_session() {
        let dir = TempDir::new().unwrap();
        let mirror = SessionMirror::open_at(dir.path().join("mirror")).unwrap();

        let session = Session::new();
        mirror.record(&session).unwrap();
        mirror.record(&session).unwrap();
        assert_eq!(mirror.len(), 1);
    }

    #[test]
    fn test_distinct_sessions_are_distinct_entries() {
        let dir = TempDir::new().unwrap();
        let mirror = SessionMirror::open_at(dir.path().join("mirror")).unwrap();

        mirror.record(&Session::new()).unwrap();
        mirror.record(&Session::new()).unwrap();
        assert_eq!(mirror.len(), 2);
    }
}
