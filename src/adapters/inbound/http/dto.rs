use axum::http::StatusCode;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::{
    errors::ServiceError,
    models::{GeneratedImage, ImageStatus, Order, OrderStatus, Product, VideoAsset, VideoStatus},
    value_objects::ProductType,
};

/// DTO for order creation requests
#[derive(Debug, Clone, Deserialize)]
pub struct CreateOrderDto {
    pub captured_frame: String,
    pub product_id: String,
    pub color: String,
    pub size: String,
    pub quantity: u32,
}

/// DTO for order responses
#[derive(Debug, Clone, Serialize)]
pub struct OrderResponseDto {
    pub id: String,
    pub status: OrderStatus,
    pub product_id: String,
    pub color: String,
    pub size: String,
    pub quantity: u32,
    pub total_price: Decimal,
    pub checkout_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Order> for OrderResponseDto {
    fn from(order: Order) -> Self {
        OrderResponseDto {
            id: order.id,
            status: order.status,
            product_id: order.product.id,
            color: order.color,
            size: order.size,
            quantity: order.quantity,
            total_price: order.total_price,
            checkout_url: order.checkout_url,
            created_at: order.created_at,
        }
    }
}

/// DTO for mockup generation requests
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateImageDto {
    pub prompt: Option<String>,
    pub seed_data: Option<String>,
    pub product_type: Option<ProductType>,
    pub color: Option<String>,
}

/// DTO for generated image responses
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedImageDto {
    pub id: String,
    pub url: Option<String>,
    pub prompt: String,
    pub status: ImageStatus,
    pub created_at: DateTime<Utc>,
}

impl From<GeneratedImage> for GeneratedImageDto {
    fn from(image: GeneratedImage) -> Self {
        GeneratedImageDto {
            id: image.id,
            url: image.url,
            prompt: image.prompt,
            status: image.status,
            created_at: image.created_at,
        }
    }
}

/// DTO for raw Storefront query requests
#[derive(Debug, Clone, Deserialize)]
pub struct ShopifyQueryDto {
    pub query: String,
    pub variables: Option<Value>,
}

/// DTO for video asset responses
#[derive(Debug, Clone, Serialize)]
pub struct VideoAssetDto {
    pub id: String,
    pub asset_id: String,
    pub playback_id: Option<String>,
    pub thumbnail: Option<String>,
    pub status: VideoStatus,
    pub ready: bool,
}

impl From<VideoAsset> for VideoAssetDto {
    fn from(asset: VideoAsset) -> Self {
        let ready = asset.is_ready();
        VideoAssetDto {
            id: asset.id,
            asset_id: asset.asset_id,
            playback_id: asset.playback_id,
            thumbnail: asset.thumbnail,
            status: asset.status,
            ready,
        }
    }
}

/// DTO for catalog entries
#[derive(Debug, Clone, Serialize)]
pub struct ProductDto {
    pub id: String,
    pub name: String,
    pub price: Decimal,
    pub product_type: ProductType,
    pub icon: String,
}

impl From<Product> for ProductDto {
    fn from(product: Product) -> Self {
        ProductDto {
            id: product.id,
            name: product.name,
            price: product.price,
            product_type: product.product_type,
            icon: product.icon,
        }
    }
}

/// DTO for error responses
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponseDto {
    pub error: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl ErrorResponseDto {
    pub fn from_service_error(error: &ServiceError) -> Self {
        let kind = match error {
            ServiceError::Validation(_) => "ValidationError",
            ServiceError::Upstream { .. } => "UpstreamError",
            ServiceError::Generation { .. } => "GenerationError",
            ServiceError::Processing { .. } => "ProcessingError",
            ServiceError::NotFound { .. } => "NotFoundError",
            ServiceError::Transport { .. } => "TransportError",
        };

        ErrorResponseDto {
            error: kind.to_string(),
            message: error.to_string(),
            timestamp: Utc::now(),
        }
    }

    pub fn bad_request(message: &str) -> Self {
        ErrorResponseDto {
            error: "BadRequest".to_string(),
            message: message.to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// HTTP status for a service error: 400 for invalid input, 404 for
/// missing resources, 500 for everything else
pub fn status_for(error: &ServiceError) -> StatusCode {
    match error {
        ServiceError::Validation(_) => StatusCode::BAD_REQUEST,
        ServiceError::NotFound { .. } => StatusCode::NOT_FOUND,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
