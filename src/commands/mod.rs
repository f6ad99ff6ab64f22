//! Shop Commands
//!
//! Frontend operations tying the session store to the remote client,
//! organized by domain.

mod catalog;
mod cart;
mod favorites;
mod orders;
mod auth;

// Re-export all public items
pub use catalog::*;
pub use cart::*;
pub use favorites::*;
pub use orders::*;
pub use auth::*;

/// Blocking browser alert for failed mutations
pub(crate) fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}
