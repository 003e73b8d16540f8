use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::{error, info};

use crate::{
    domain::{
        errors::{ServiceError, ServiceResult, ValidationError},
        models::{CheckoutRequest, CreateOrderRequest, Order},
    },
    ports::{repositories::ShopifyRepository, services::CommerceService},
};

/// Implementation of CommerceService over the Shopify Storefront API
#[derive(Clone)]
pub struct CommerceServiceImpl {
    repository: Arc<dyn ShopifyRepository>,
}

impl CommerceServiceImpl {
    pub fn new(repository: Arc<dyn ShopifyRepository>) -> Self {
        Self { repository }
    }

    /// First GraphQL error message in a response, if any
    fn first_error_message(response: &Value) -> Option<String> {
        let errors = response.get("errors")?.as_array()?;
        let first = errors.first()?;
        Some(
            first
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or("unknown GraphQL error")
                .to_string(),
        )
    }
}

#[async_trait]
impl CommerceService for CommerceServiceImpl {
    async fn execute_query(&self, query: &str, variables: Option<Value>) -> ServiceResult<Value> {
        if query.trim().is_empty() {
            return Err(ValidationError::EmptyQuery.into());
        }

        let response = self.repository.execute_query(query, variables).await?;

        if let Some(message) = Self::first_error_message(&response) {
            return Err(ServiceError::upstream("shopify", message));
        }

        Ok(response)
    }

    async fn create_order(&self, request: CreateOrderRequest) -> ServiceResult<Order> {
        let mut order = Order::new(request)?;

        let checkout_request = CheckoutRequest::from_order(&order);

        match self.repository.create_checkout(&checkout_request).await {
            Ok(checkout) => {
                order.complete(checkout.web_url);
                info!(order_id = %order.id, "order completed");
                Ok(order)
            }
            Err(err) => {
                order.fail();
                error!(order_id = %order.id, error = %err, "checkout creation failed");
                Err(err)
            }
        }
    }
}
