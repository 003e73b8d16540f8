mod mock;
mod storefront;

pub use mock::MockShopifyRepository;
pub use storefront::{ShopifyConfig, ShopifyStorefrontRepository};
