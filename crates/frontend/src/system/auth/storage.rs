use contracts::system::users::User;
use serde::{Deserialize, Serialize};
use std::sync::Mutex;

/// localStorage key of the persisted auth slice
pub const AUTH_STORAGE_KEY: &str = "auth-storage";

/// The part of the auth state that survives a page reload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedAuth {
    pub user: Option<User>,
    pub token: Option<String>,
    #[serde(default)]
    pub is_authenticated: bool,
}

/// Stored shape: `{ "state": {...}, "version": 0 }`, readable by sessions
/// written before the Rust client shipped
#[derive(Debug, Serialize, Deserialize)]
struct StoredEnvelope {
    state: PersistedAuth,
    #[serde(default)]
    version: u32,
}

pub fn encode(auth: &PersistedAuth) -> Result<String, serde_json::Error> {
    serde_json::to_string(&StoredEnvelope {
        state: auth.clone(),
        version: 0,
    })
}

/// Corrupt or foreign payloads read as "no session"
pub fn decode(raw: &str) -> Option<PersistedAuth> {
    match serde_json::from_str::<StoredEnvelope>(raw) {
        Ok(envelope) => Some(envelope.state),
        Err(e) => {
            log::warn!("Ignoring unreadable {}: {}", AUTH_STORAGE_KEY, e);
            None
        }
    }
}

/// Session persistence; the gateway reads the token from here on every
/// request and clears it on a 401
pub trait SessionStorage: Send + Sync {
    fn load(&self) -> Option<PersistedAuth>;
    fn save(&self, auth: &PersistedAuth);
    fn clear(&self);

    fn token(&self) -> Option<String> {
        self.load()
            .and_then(|auth| auth.token)
            .filter(|token| !token.is_empty())
    }
}

/// Browser localStorage under [`AUTH_STORAGE_KEY`]
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalSessionStorage;

impl LocalSessionStorage {
    #[cfg(target_arch = "wasm32")]
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn storage() -> Option<web_sys::Storage> {
        None
    }

    pub fn is_available() -> bool {
        Self::storage().is_some()
    }
}

impl SessionStorage for LocalSessionStorage {
    fn load(&self) -> Option<PersistedAuth> {
        let raw = Self::storage()?.get_item(AUTH_STORAGE_KEY).ok()??;
        decode(&raw)
    }

    fn save(&self, auth: &PersistedAuth) {
        let Some(storage) = Self::storage() else {
            return;
        };
        match encode(auth) {
            Ok(raw) => {
                if storage.set_item(AUTH_STORAGE_KEY, &raw).is_err() {
                    log::error!("Failed to write {}", AUTH_STORAGE_KEY);
                }
            }
            Err(e) => log::error!("Failed to encode session: {}", e),
        }
    }

    fn clear(&self) {
        if let Some(storage) = Self::storage() {
            if storage.remove_item(AUTH_STORAGE_KEY).is_err() {
                log::error!("Failed to remove {}", AUTH_STORAGE_KEY);
            }
        }
    }
}

/// In-process storage, used when localStorage is blocked and in tests.
/// Keeps the encoded string so it behaves like the browser store.
#[derive(Debug, Default)]
pub struct MemorySessionStorage {
    slot: Mutex<Option<String>>,
}

impl MemorySessionStorage {
    pub fn with(auth: &PersistedAuth) -> Self {
        let storage = Self::default();
        storage.save(auth);
        storage
    }

    pub fn raw(&self) -> Option<String> {
        self.slot.lock().ok().and_then(|slot| slot.clone())
    }
}

impl SessionStorage for MemorySessionStorage {
    fn load(&self) -> Option<PersistedAuth> {
        decode(&self.raw()?)
    }

    fn save(&self, auth: &PersistedAuth) {
        let Ok(raw) = encode(auth) else {
            return;
        };
        if let Ok(mut slot) = self.slot.lock() {
            *slot = Some(raw);
        }
    }

    fn clear(&self) {
        if let Ok(mut slot) = self.slot.lock() {
            *slot = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_envelope_written_by_previous_client() {
        let raw = r#"{"state":{"user":null,"token":"abc","isAuthenticated":true},"version":0}"#;
        let auth = decode(raw).unwrap();
        assert_eq!(auth.token.as_deref(), Some("abc"));
        assert!(auth.is_authenticated);
    }

    #[test]
    fn test_garbage_reads_as_no_session() {
        assert!(decode("{not json").is_none());
        assert!(decode(r#"{"token":"abc"}"#).is_none());
    }

    #[test]
    fn test_memory_storage_roundtrip_and_clear() {
        let storage = MemorySessionStorage::default();
        assert!(storage.token().is_none());

        storage.save(&PersistedAuth {
            user: None,
            token: Some("t-1".into()),
            is_authenticated: true,
        });
        assert_eq!(storage.token().as_deref(), Some("t-1"));
        assert!(storage.raw().unwrap().contains("\"state\""));

        storage.clear();
        assert!(storage.load().is_none());
    }

    #[test]
    fn test_empty_token_is_no_token() {
        let storage = MemorySessionStorage::with(&PersistedAuth {
            token: Some(String::new()),
            ..Default::default()
        });
        assert!(storage.token().is_none());
    }
}
