use crate::domain::{
    errors::ServiceResult,
    models::{CreateOrderRequest, Order},
};
use async_trait::async_trait;
use serde_json::Value;

/// Port for the Shopify-backed commerce use cases
#[async_trait]
pub trait CommerceService: Send + Sync + 'static {
    /// Execute a raw Storefront GraphQL query, surfacing the first
    /// GraphQL error message when the response carries errors
    async fn execute_query(&self, query: &str, variables: Option<Value>) -> ServiceResult<Value>;

    /// Create an order and its checkout session
    ///
    /// On success the returned order is completed and carries the
    /// checkout URL; on checkout failure the order is marked failed and
    /// the error is propagated.
    async fn create_order(&self, request: CreateOrderRequest) -> ServiceResult<Order>;
}
