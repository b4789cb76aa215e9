use super::Result;
use crate::api::models::{Session, UserProfile};
use crate::error::StorageError;
use keyring::Entry;
use std::sync::{Arc, Mutex};

const SERVICE_NAME: &str = "resv-cli";

/// Persists the session as one serialized record per profile. Storing
/// token and user together makes divergence between the two
/// structurally impossible; a record whose token is empty counts as
/// logged out.
#[derive(Debug, Clone)]
pub struct SessionStore {
    pub profile_name: String,
    backend: Backend,
}

#[derive(Debug, Clone)]
enum Backend {
    Keyring,
    /// Process-local storage for tests and throwaway sessions.
    Memory(Arc<Mutex<Option<String>>>),
}

impl SessionStore {
    pub fn new(profile_name: impl Into<String>) -> Self {
        Self {
            profile_name: profile_name.into(),
            backend: Backend::Keyring,
        }
    }

    /// Store backed by process memory instead of the OS keyring.
    pub fn in_memory() -> Self {
        Self {
            profile_name: "memory".to_string(),
            backend: Backend::Memory(Arc::new(Mutex::new(None))),
        }
    }

    fn entry_name(&self) -> String {
        format!("session-{}", self.profile_name)
    }

    /// Persist token and user together. Best-effort: a storage failure
    /// is logged, never surfaced to the caller.
    pub fn store_session(&self, token: &str, user: Option<&UserProfile>) {
        let session = Session {
            token: token.to_string(),
            user: user.cloned(),
        };
        let serialized = match serde_json::to_string(&session) {
            Ok(s) => s,
            Err(e) => {
                log::warn!("Failed to serialize session: {}", e);
                return;
            }
        };
        if let Err(e) = self.write_raw(&serialized) {
            log::warn!(
                "Failed to store session for profile {}: {}",
                self.profile_name,
                e
            );
        }
    }

    pub fn token(&self) -> Option<String> {
        self.load().map(|s| s.token)
    }

    pub fn user(&self) -> Option<UserProfile> {
        self.load().and_then(|s| s.user)
    }

    /// Remove the stored session. Idempotent; a missing entry is fine.
    pub fn clear(&self) -> Result<()> {
        self.delete_raw()
    }

    fn load(&self) -> Option<Session> {
        let raw = match self.read_raw() {
            Ok(raw) => raw?,
            Err(e) => {
                log::warn!(
                    "Failed to read session for profile {}: {}",
                    self.profile_name,
                    e
                );
                return None;
            }
        };
        match serde_json::from_str::<Session>(&raw) {
            Ok(session) if !session.token.is_empty() => Some(session),
            Ok(_) => None,
            Err(e) => {
                log::warn!(
                    "Stored session is not parseable, treating as logged out: {}",
                    e
                );
                None
            }
        }
    }

    fn entry(&self) -> Result<Entry> {
        Entry::new(SERVICE_NAME, &self.entry_name())
            .map_err(|e| StorageError::KeyringError(e.to_string()))
    }

    fn read_raw(&self) -> Result<Option<String>> {
        match &self.backend {
            Backend::Keyring => match self.entry()?.get_password() {
                Ok(v) => Ok(Some(v)),
                Err(keyring::Error::NoEntry) => Ok(None),
                Err(e) => Err(StorageError::KeyringError(e.to_string())),
            },
            Backend::Memory(slot) => Ok(slot.lock().unwrap().clone()),
        }
    }

    fn write_raw(&self, value: &str) -> Result<()> {
        match &self.backend {
            Backend::Keyring => self
                .entry()?
                .set_password(value)
                .map_err(|e| StorageError::KeyringError(e.to_string())),
            Backend::Memory(slot) => {
                *slot.lock().unwrap() = Some(value.to_string());
                Ok(())
            }
        }
    }

    fn delete_raw(&self) -> Result<()> {
        match &self.backend {
            Backend::Keyring => match self.entry()?.delete_credential() {
                Ok(_) | Err(keyring::Error::NoEntry) => Ok(()),
                Err(e) => Err(StorageError::KeyringError(e.to_string())),
            },
            Backend::Memory(slot) => {
                *slot.lock().unwrap() = None;
                Ok(())
            }
        }
    }
}
