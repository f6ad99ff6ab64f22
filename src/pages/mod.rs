//! Pages
//!
//! One component per hash route.

mod home;
mod favorites;
mod orders;
mod debug;

pub use home::Home;
pub use favorites::Favorites;
pub use orders::Orders;
pub use debug::Diagnostics;
