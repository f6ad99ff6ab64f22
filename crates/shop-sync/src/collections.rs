//! Local Collection Store
//!
//! In-memory mirrors of the cart and favorites. Every toggle applies its
//! local transition synchronously and hands back the change that still has
//! to reach the backend. Local state is authoritative: a change that fails
//! remotely (or is never pushed) is not rolled back.
//!
//! The two collections deliberately differ on insert:
//! - cart lines appear immediately with client-built fields
//! - favorites appear only once the backend returns its record

use log::debug;

use crate::client::{ApiClient, Resource};
use crate::error::ApiResult;
use crate::id::ItemId;
use crate::models::{CartEntry, CatalogItem, FavoriteEntry};

// ========================
// Cart
// ========================

/// Cart lines, at most one per catalog item
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CartCollection {
    entries: Vec<CartEntry>,
}

/// Cart transition already applied locally
#[must_use = "the local cart already changed; push the change to mirror it remotely"]
#[derive(Debug, Clone, PartialEq)]
pub enum CartChange {
    Added(CartEntry),
    Removed(CartEntry),
}

impl CartCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace contents from a remote listing, keeping the first line per catalog item
    pub fn from_entries(entries: Vec<CartEntry>) -> Self {
        let mut cart = Self::new();
        for entry in entries {
            if !cart.contains(entry.parent()) {
                cart.entries.push(entry);
            }
        }
        cart
    }

    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Membership query by catalog id
    pub fn contains(&self, catalog_id: &ItemId) -> bool {
        self.entries.iter().any(|entry| entry.parent() == catalog_id)
    }

    pub fn total_price(&self) -> f64 {
        self.entries.iter().map(|entry| entry.price).sum()
    }

    /// Remove the item's line if present, otherwise add a locally built one
    pub fn toggle(&mut self, item: &CatalogItem) -> CartChange {
        if let Some(pos) = self.entries.iter().position(|entry| entry.parent() == &item.id) {
            let removed = self.entries.remove(pos);
            debug!("Cart: removed {} (line {})", item.id, removed.id);
            CartChange::Removed(removed)
        } else {
            let entry = item.to_cart_entry();
            self.entries.push(entry.clone());
            debug!("Cart: added {}", item.id);
            CartChange::Added(entry)
        }
    }

    /// Remove the line for a catalog item (cart drawer).
    ///
    /// Lines are matched by catalog id: an unconfirmed line's own id is only a
    /// stand-in and can equal another line's server id. The returned change
    /// carries the line's current id for the remote delete.
    pub fn remove(&mut self, catalog_id: &ItemId) -> Option<CartChange> {
        let pos = self.entries.iter().position(|entry| entry.parent() == catalog_id)?;
        Some(CartChange::Removed(self.entries.remove(pos)))
    }

    /// Drop the lines an order was placed for, leaving anything added since.
    ///
    /// Returns the removed lines as they are now, with any server ids adopted
    /// after the order snapshot was taken.
    pub fn remove_ordered(&mut self, ordered: &[CartEntry]) -> Vec<CartEntry> {
        let (removed, kept): (Vec<_>, Vec<_>) = std::mem::take(&mut self.entries)
            .into_iter()
            .partition(|entry| ordered.iter().any(|o| o.parent() == entry.parent()));
        self.entries = kept;
        removed
    }

    /// Adopt the backend's record for a line that is still in the cart.
    ///
    /// Returns false when the line was toggled off before the create resolved.
    pub fn reconcile(&mut self, confirmed: CartEntry) -> bool {
        match self
            .entries
            .iter_mut()
            .find(|entry| entry.parent() == confirmed.parent())
        {
            Some(entry) => {
                *entry = confirmed;
                true
            }
            None => false,
        }
    }

    /// Empty the cart locally, returning the removed lines
    pub fn take_all(&mut self) -> Vec<CartEntry> {
        std::mem::take(&mut self.entries)
    }
}

impl CartChange {
    pub fn entry(&self) -> &CartEntry {
        match self {
            CartChange::Added(entry) | CartChange::Removed(entry) => entry,
        }
    }

    /// Mirror the change remotely; an add returns the server's record
    pub async fn push(self, api: &ApiClient) -> ApiResult<Option<CartEntry>> {
        match self {
            CartChange::Added(entry) => api.create(Resource::Cart, &entry).await.map(Some),
            CartChange::Removed(entry) => api.delete(Resource::Cart, &entry.id).await.map(|_| None),
        }
    }
}

// ========================
// Favorites
// ========================

/// Favorites, keyed by catalog id
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FavoriteCollection {
    entries: Vec<FavoriteEntry>,
}

/// Favorite transition. `Removed` is already applied; `Requested` is not
/// visible until the create resolves and is confirmed.
#[must_use = "push the change to the backend"]
#[derive(Debug, Clone, PartialEq)]
pub enum FavoriteChange {
    Removed(FavoriteEntry),
    Requested(FavoriteEntry),
}

impl FavoriteCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: Vec<FavoriteEntry>) -> Self {
        let mut favorites = Self::new();
        for entry in entries {
            favorites.confirm(entry);
        }
        favorites
    }

    pub fn entries(&self) -> &[FavoriteEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, catalog_id: &ItemId) -> bool {
        self.entries.iter().any(|entry| &entry.id == catalog_id)
    }

    pub fn toggle(&mut self, item: &CatalogItem) -> FavoriteChange {
        if let Some(pos) = self.entries.iter().position(|entry| entry.id == item.id) {
            debug!("Favorites: removed {}", item.id);
            FavoriteChange::Removed(self.entries.remove(pos))
        } else {
            debug!("Favorites: requested {}", item.id);
            FavoriteChange::Requested(item.to_favorite_entry())
        }
    }

    /// Insert a server-confirmed record unless its id is already present
    pub fn confirm(&mut self, entry: FavoriteEntry) -> bool {
        if self.contains(&entry.id) {
            return false;
        }
        self.entries.push(entry);
        true
    }
}

impl FavoriteChange {
    pub fn entry(&self) -> &FavoriteEntry {
        match self {
            FavoriteChange::Removed(entry) | FavoriteChange::Requested(entry) => entry,
        }
    }

    /// Mirror the change remotely; a request returns the record to confirm
    pub async fn push(self, api: &ApiClient) -> ApiResult<Option<FavoriteEntry>> {
        match self {
            FavoriteChange::Requested(entry) => {
                api.create(Resource::Favorites, &entry).await.map(Some)
            }
            FavoriteChange::Removed(entry) => {
                api.delete(Resource::Favorites, &entry.id).await.map(|_| None)
            }
        }
    }
}
