//! Browser Token Storage
//!
//! Bearer token kept in `localStorage`, read fresh on every request.

use log::warn;
use shop_sync::TokenStore;

pub struct LocalStorageTokens {
    key: String,
}

impl LocalStorageTokens {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

impl TokenStore for LocalStorageTokens {
    fn load(&self) -> Option<String> {
        local_storage()?
            .get_item(&self.key)
            .ok()?
            .filter(|token| !token.is_empty())
    }

    fn save(&self, token: &str) {
        match local_storage() {
            Some(storage) => {
                if let Err(e) = storage.set_item(&self.key, token) {
                    warn!("[storage] Could not persist token: {:?}", e);
                }
            }
            None => warn!("[storage] localStorage unavailable, token not persisted"),
        }
    }

    fn clear(&self) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(&self.key);
        }
    }
}
