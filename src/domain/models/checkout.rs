use serde::Serialize;

use crate::domain::models::Order;

/// A single checkout line item
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineItem {
    pub variant_id: String,
    pub quantity: u32,
    pub attributes: Vec<(String, String)>,
}

/// Request to create a Shopify-hosted checkout session
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckoutRequest {
    pub line_items: Vec<LineItem>,
}

impl CheckoutRequest {
    /// Build a single-line-item checkout request from an order
    pub fn from_order(order: &Order) -> Self {
        Self {
            line_items: vec![LineItem {
                variant_id: order.product.id.clone(),
                quantity: order.quantity,
                attributes: vec![
                    ("color".to_string(), order.color.clone()),
                    ("size".to_string(), order.size.clone()),
                ],
            }],
        }
    }
}

/// A created checkout session
#[derive(Debug, Clone, Serialize)]
pub struct Checkout {
    pub id: String,
    pub web_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{CreateOrderRequest, Product};

    #[test]
    fn test_single_line_item_from_order() {
        let order = Order::new(CreateOrderRequest {
            captured_frame: "data:image/png;base64,iVBORw0KGgo=".to_string(),
            product: Product::find_in_catalog("merch-hoodie").unwrap(),
            color: "navy".to_string(),
            size: "L".to_string(),
            quantity: 3,
        })
        .unwrap();

        let request = CheckoutRequest::from_order(&order);
        assert_eq!(request.line_items.len(), 1);

        let line = &request.line_items[0];
        assert_eq!(line.variant_id, "merch-hoodie");
        assert_eq!(line.quantity, 3);
        assert!(line
            .attributes
            .contains(&("color".to_string(), "navy".to_string())));
        assert!(line
            .attributes
            .contains(&("size".to_string(), "L".to_string())));
    }
}
