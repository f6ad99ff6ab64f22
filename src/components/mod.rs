//! UI Components
//!
//! Reusable Leptos components.

mod card;
mod header;
mod auth_panel;
mod drawer;
mod notice_banner;

pub use card::{Card, CardSkeleton};
pub use header::Header;
pub use auth_panel::AuthPanel;
pub use drawer::Drawer;
pub use notice_banner::{LoadErrorBanner, NoticeBanner};

/// Price label; whole amounts drop the decimals
pub fn format_price(price: f64) -> String {
    if price.fract() == 0.0 {
        format!("{:.0} RUB", price)
    } else {
        format!("{:.2} RUB", price)
    }
}
