use async_trait::async_trait;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::{
    domain::{
        errors::{ServiceError, ServiceResult},
        models::{Checkout, CheckoutRequest},
    },
    ports::repositories::ShopifyRepository,
};

/// In-memory Shopify adapter for testing and local development
///
/// Returns deterministic checkout sessions without touching the network.
/// Queries answer with a canned response when one is configured.
#[derive(Default)]
pub struct MockShopifyRepository {
    canned_response: Option<Value>,
    fail_checkout: bool,
}

impl MockShopifyRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer every query with the given response body
    pub fn with_response(response: Value) -> Self {
        Self {
            canned_response: Some(response),
            ..Self::default()
        }
    }

    /// Fail every checkout creation with an upstream error
    pub fn failing() -> Self {
        Self {
            fail_checkout: true,
            ..Self::default()
        }
    }
}

#[async_trait]
impl ShopifyRepository for MockShopifyRepository {
    async fn execute_query(&self, _query: &str, _variables: Option<Value>) -> ServiceResult<Value> {
        Ok(self
            .canned_response
            .clone()
            .unwrap_or_else(|| json!({ "data": {} })))
    }

    async fn create_checkout(&self, request: &CheckoutRequest) -> ServiceResult<Checkout> {
        if self.fail_checkout {
            return Err(ServiceError::upstream(
                "shopify",
                "checkout creation unavailable",
            ));
        }

        if request.line_items.is_empty() {
            return Err(ServiceError::upstream("shopify", "cart has no lines"));
        }

        let token = Uuid::new_v4();
        Ok(Checkout {
            id: format!("gid://shopify/Cart/{token}"),
            web_url: format!("https://checkout.merchify.dev/c/{token}"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::LineItem;

    fn request() -> CheckoutRequest {
        CheckoutRequest {
            line_items: vec![LineItem {
                variant_id: "merch-tshirt".to_string(),
                quantity: 1,
                attributes: vec![],
            }],
        }
    }

    #[tokio::test]
    async fn test_mock_checkout_has_url() {
        let repo = MockShopifyRepository::new();
        let checkout = repo.create_checkout(&request()).await.unwrap();
        assert!(checkout.web_url.starts_with("https://checkout.merchify.dev/c/"));
        assert!(checkout.id.starts_with("gid://shopify/Cart/"));
    }

    #[tokio::test]
    async fn test_failing_mock() {
        let repo = MockShopifyRepository::failing();
        assert!(repo.create_checkout(&request()).await.is_err());
    }

    #[tokio::test]
    async fn test_canned_response() {
        let repo = MockShopifyRepository::with_response(json!({
            "errors": [{ "message": "boom" }]
        }));
        let response = repo.execute_query("{ shop { name } }", None).await.unwrap();
        assert_eq!(response["errors"][0]["message"], "boom");
    }
}
