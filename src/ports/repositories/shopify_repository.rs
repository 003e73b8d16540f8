use crate::domain::{
    errors::ServiceResult,
    models::{Checkout, CheckoutRequest},
};
use async_trait::async_trait;
use serde_json::Value;

/// Repository for the Shopify Storefront GraphQL API
#[async_trait]
pub trait ShopifyRepository: Send + Sync + 'static {
    /// Execute a raw GraphQL query and return the full response body
    ///
    /// GraphQL-level errors are left in the response for the caller to
    /// surface; only transport and HTTP failures become errors here.
    async fn execute_query(&self, query: &str, variables: Option<Value>) -> ServiceResult<Value>;

    /// Create a checkout session for the given line items
    async fn create_checkout(&self, request: &CheckoutRequest) -> ServiceResult<Checkout>;
}
