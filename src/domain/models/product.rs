use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::{errors::ValidationError, value_objects::ProductType};

/// A merchandise catalog entry a design can be applied to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: Decimal,
    pub product_type: ProductType,
    pub icon: String,
}

impl Product {
    /// Create a new Product with validation
    pub fn new(
        id: String,
        name: String,
        price: Decimal,
        product_type: ProductType,
        icon: String,
    ) -> Result<Self, ValidationError> {
        if id.trim().is_empty() {
            return Err(ValidationError::MissingField {
                field: "id".to_string(),
            });
        }

        if name.trim().is_empty() {
            return Err(ValidationError::MissingField {
                field: "name".to_string(),
            });
        }

        if price.is_sign_negative() {
            return Err(ValidationError::NegativePrice {
                value: price.to_string(),
            });
        }

        Ok(Self {
            id,
            name,
            price,
            product_type,
            icon,
        })
    }

    /// The static merchandise catalog
    ///
    /// Catalog entries are read-only; ids double as the Storefront variant
    /// ids used when building checkout line items.
    pub fn catalog() -> Vec<Product> {
        vec![
            Product {
                id: "merch-tshirt".to_string(),
                name: "Classic T-Shirt".to_string(),
                price: Decimal::new(2499, 2),
                product_type: ProductType::TShirt,
                icon: "👕".to_string(),
            },
            Product {
                id: "merch-hoodie".to_string(),
                name: "Pullover Hoodie".to_string(),
                price: Decimal::new(4499, 2),
                product_type: ProductType::Hoodie,
                icon: "🧥".to_string(),
            },
            Product {
                id: "merch-mug".to_string(),
                name: "Ceramic Mug".to_string(),
                price: Decimal::new(1499, 2),
                product_type: ProductType::Mug,
                icon: "☕".to_string(),
            },
            Product {
                id: "merch-poster".to_string(),
                name: "Matte Poster".to_string(),
                price: Decimal::new(1999, 2),
                product_type: ProductType::Poster,
                icon: "🖼️".to_string(),
            },
        ]
    }

    /// Look up a catalog product by id
    pub fn find_in_catalog(id: &str) -> Result<Product, ValidationError> {
        Self::catalog()
            .into_iter()
            .find(|p| p.id == id)
            .ok_or_else(|| ValidationError::UnknownProduct(id.to_string()))
    }
}
