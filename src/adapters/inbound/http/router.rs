use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::handlers::{
    create_order, generate_image, get_video, health, list_products, shopify_query, upload_video,
};
use crate::ports::services::{CommerceService, ImageService, VideoService};

/// Application state containing all services
#[derive(Clone)]
pub struct AppState {
    pub video_service: Arc<dyn VideoService>,
    pub image_service: Arc<dyn ImageService>,
    pub commerce_service: Arc<dyn CommerceService>,
}

/// Create the main application router with all endpoints
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/products", get(list_products))
        // Order + checkout
        .route("/api/create-order", post(create_order))
        // Mockup generation
        .route("/api/generate-image", post(generate_image))
        // Raw Storefront pass-through
        .route("/api/shopify-query", post(shopify_query))
        // Video hosting
        .route("/api/upload-mux", post(upload_video))
        .route("/api/videos/{asset_id}", get(get_video))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        adapters::outbound::{
            imagegen::MockImageRepository, mux::MockVideoRepository, shopify::MockShopifyRepository,
        },
        services::{CommerceServiceImpl, ImageServiceImpl, VideoServiceImpl},
    };
    use axum_test::TestServer;

    fn create_test_app_state() -> AppState {
        AppState {
            video_service: Arc::new(VideoServiceImpl::new(Arc::new(MockVideoRepository::new()))),
            image_service: Arc::new(ImageServiceImpl::new(Arc::new(MockImageRepository::new()))),
            commerce_service: Arc::new(CommerceServiceImpl::new(Arc::new(
                MockShopifyRepository::new(),
            ))),
        }
    }

    #[tokio::test]
    async fn test_router_creation() {
        let state = create_test_app_state();
        let _app = create_router(state);
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let server = TestServer::new(create_router(create_test_app_state())).unwrap();
        let response = server.get("/health").await;
        response.assert_status_ok();
    }

    #[tokio::test]
    async fn test_state_clones_share_services() {
        let state = create_test_app_state();
        let clone = state.clone();
        assert!(Arc::ptr_eq(&state.commerce_service, &clone.commerce_service));
        assert!(Arc::ptr_eq(&state.video_service, &clone.video_service));
        assert!(Arc::ptr_eq(&state.image_service, &clone.image_service));
    }
}
