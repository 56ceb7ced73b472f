use crate::application::models::order::{Order, OrderRequest, OrdersQuery};
use crate::error::AppError;
use async_trait::async_trait;

/// Interface for the order service
#[async_trait]
pub trait OrderService: Send + Sync {
    /// Gets orders for the given window
    ///
    /// The status filter of the query, when present, is always sent to the
    /// endpoint; there is no call site that discards it.
    async fn orders(&self, query: &OrdersQuery) -> Result<Vec<Order>, AppError>;

    /// Gets the symbols of orders filled in the last 35 days
    async fn recent_orders(&self) -> Result<Vec<String>, AppError>;

    /// Stores an order server-side without executing it
    async fn create_saved_order(&self, order: &OrderRequest) -> Result<(), AppError>;

    /// Places an order for execution
    async fn place_order(&self, order: &OrderRequest) -> Result<(), AppError>;
}
