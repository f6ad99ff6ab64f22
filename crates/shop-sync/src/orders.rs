use log::warn;

use crate::client::{ApiClient, Resource};
use crate::error::ApiResult;
use crate::models::{CartEntry, NewOrder, Order};

/// Post the cart lines as an order.
pub async fn submit_order(api: &ApiClient, entries: Vec<CartEntry>) -> ApiResult<Order> {
    api.create(Resource::Orders, &NewOrder::from_entries(entries)).await
}

/// Delete ordered lines from the remote cart, one at a time.
///
/// Runs after the order exists and the lines are gone locally; a failed
/// delete is logged and skipped. Returns how many lines were deleted.
pub async fn clear_ordered_lines(api: &ApiClient, order: &Order, lines: &[CartEntry]) -> usize {
    let mut cleared = 0;
    for line in lines {
        match api.delete(Resource::Cart, &line.id).await {
            Ok(()) => cleared += 1,
            Err(e) => warn!("Order {}: could not clear cart line {}: {}", order.id, line.id, e),
        }
    }
    cleared
}
