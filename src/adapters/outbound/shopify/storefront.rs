use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::{debug, error};

use crate::{
    domain::{
        errors::{ServiceError, ServiceResult},
        models::{Checkout, CheckoutRequest},
    },
    ports::repositories::ShopifyRepository,
};

/// Configuration for the Shopify Storefront API
#[derive(Debug, Clone)]
pub struct ShopifyConfig {
    pub store_domain: String,
    pub storefront_token: String,
    pub api_version: String,
}

impl ShopifyConfig {
    pub fn new(store_domain: String, storefront_token: String) -> Self {
        Self {
            store_domain,
            storefront_token,
            api_version: "2025-01".to_string(),
        }
    }
}

/// Checkout sessions are created through `cartCreate`; the returned
/// cart carries the Shopify-hosted checkout URL.
const CART_CREATE_MUTATION: &str = r"
mutation CartCreate($input: CartInput!) {
    cartCreate(input: $input) {
        cart {
            id
            checkoutUrl
        }
        userErrors {
            field
            message
        }
    }
}
";

/// Storefront GraphQL adapter backed by reqwest
pub struct ShopifyStorefrontRepository {
    client: reqwest::Client,
    endpoint: String,
    token: String,
}

impl ShopifyStorefrontRepository {
    pub fn new(config: &ShopifyConfig) -> Self {
        let endpoint = format!(
            "https://{}/api/{}/graphql.json",
            config.store_domain, config.api_version
        );

        Self {
            client: reqwest::Client::new(),
            endpoint,
            token: config.storefront_token.clone(),
        }
    }

    /// Post a GraphQL request body and return the parsed response body
    async fn post(&self, body: &Value) -> ServiceResult<Value> {
        let response = self
            .client
            .post(&self.endpoint)
            .header("X-Shopify-Storefront-Access-Token", &self.token)
            .header("Content-Type", "application/json")
            .json(body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            error!(
                status = %status,
                body = %text.chars().take(500).collect::<String>(),
                "Shopify API returned non-success status"
            );
            return Err(ServiceError::upstream(
                "shopify",
                format!(
                    "HTTP {status}: {}",
                    text.chars().take(200).collect::<String>()
                ),
            ));
        }

        serde_json::from_str(&text).map_err(|e| {
            error!(error = %e, "failed to parse Shopify GraphQL response");
            ServiceError::upstream("shopify", format!("invalid response body: {e}"))
        })
    }
}

#[async_trait]
impl ShopifyRepository for ShopifyStorefrontRepository {
    async fn execute_query(&self, query: &str, variables: Option<Value>) -> ServiceResult<Value> {
        debug!(endpoint = %self.endpoint, "executing Storefront query");

        let body = json!({
            "query": query,
            "variables": variables.unwrap_or(Value::Null),
        });

        self.post(&body).await
    }

    async fn create_checkout(&self, request: &CheckoutRequest) -> ServiceResult<Checkout> {
        let lines: Vec<Value> = request
            .line_items
            .iter()
            .map(|item| {
                let attributes: Vec<Value> = item
                    .attributes
                    .iter()
                    .map(|(key, value)| json!({ "key": key, "value": value }))
                    .collect();

                json!({
                    "merchandiseId": item.variant_id,
                    "quantity": item.quantity,
                    "attributes": attributes,
                })
            })
            .collect();

        let body = json!({
            "query": CART_CREATE_MUTATION,
            "variables": { "input": { "lines": lines } },
        });

        let response = self.post(&body).await?;

        if let Some(errors) = response.get("errors").and_then(Value::as_array) {
            if let Some(first) = errors.first() {
                let message = first
                    .get("message")
                    .and_then(Value::as_str)
                    .unwrap_or("unknown GraphQL error");
                return Err(ServiceError::upstream("shopify", message));
            }
        }

        let cart_create = response
            .pointer("/data/cartCreate")
            .ok_or_else(|| ServiceError::upstream("shopify", "missing cartCreate payload"))?;

        if let Some(user_errors) = cart_create.get("userErrors").and_then(Value::as_array) {
            if let Some(first) = user_errors.first() {
                let message = first
                    .get("message")
                    .and_then(Value::as_str)
                    .unwrap_or("unknown user error");
                return Err(ServiceError::upstream("shopify", message));
            }
        }

        let cart = cart_create
            .get("cart")
            .filter(|c| !c.is_null())
            .ok_or_else(|| ServiceError::upstream("shopify", "cartCreate returned no cart"))?;

        let id = cart
            .get("id")
            .and_then(Value::as_str)
            .ok_or_else(|| ServiceError::upstream("shopify", "cart missing id"))?;
        let web_url = cart
            .get("checkoutUrl")
            .and_then(Value::as_str)
            .ok_or_else(|| ServiceError::upstream("shopify", "cart missing checkoutUrl"))?;

        Ok(Checkout {
            id: id.to_string(),
            web_url: web_url.to_string(),
        })
    }
}
