use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::{
    errors::ValidationError,
    models::Product,
    value_objects::CapturedFrame,
};

/// Lifecycle states of an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Completed,
    Failed,
}

/// Request to create a new order from customization data
#[derive(Debug, Clone)]
pub struct CreateOrderRequest {
    pub captured_frame: String,
    pub product: Product,
    pub color: String,
    pub size: String,
    pub quantity: u32,
}

/// A merchandise order for a single customized product
#[derive(Debug, Clone, Serialize)]
pub struct Order {
    pub id: String,
    pub captured_frame: CapturedFrame,
    pub product: Product,
    pub color: String,
    pub size: String,
    pub quantity: u32,
    pub total_price: Decimal,
    pub status: OrderStatus,
    pub checkout_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Order {
    /// Create a new pending Order with validation
    ///
    /// Order ids are derived from the creation timestamp, matching the
    /// ids shown to customers in the storefront UI.
    pub fn new(request: CreateOrderRequest) -> Result<Self, ValidationError> {
        let captured_frame = CapturedFrame::new(request.captured_frame)?;

        if request.color.trim().is_empty() {
            return Err(ValidationError::MissingField {
                field: "color".to_string(),
            });
        }

        if request.size.trim().is_empty() {
            return Err(ValidationError::MissingField {
                field: "size".to_string(),
            });
        }

        if request.quantity == 0 {
            return Err(ValidationError::InvalidQuantity {
                actual: request.quantity,
            });
        }

        let now = Utc::now();
        let total_price = request.product.price * Decimal::from(request.quantity);

        Ok(Self {
            id: format!("order_{}", now.timestamp_millis()),
            captured_frame,
            product: request.product,
            color: request.color,
            size: request.size,
            quantity: request.quantity,
            total_price,
            status: OrderStatus::Pending,
            checkout_url: None,
            created_at: now,
            updated_at: now,
        })
    }

    /// Whether the order still satisfies its invariants
    pub fn is_valid(&self) -> bool {
        !self.captured_frame.as_str().trim().is_empty()
            && !self.product.id.trim().is_empty()
            && !self.color.trim().is_empty()
            && !self.size.trim().is_empty()
            && self.quantity > 0
    }

    /// Mark the order completed, attaching the checkout URL
    pub fn complete(&mut self, checkout_url: String) {
        self.status = OrderStatus::Completed;
        self.checkout_url = Some(checkout_url);
        self.updated_at = Utc::now();
    }

    /// Mark the order failed
    pub fn fail(&mut self) {
        self.status = OrderStatus::Failed;
        self.updated_at = Utc::now();
    }
}
