use anyhow::{Context, Result};
use clap::Parser;
use merchify::{
    adapters::inbound::http::router::{create_router, AppState},
    app::{AppBuilder, AppConfig, CommerceBackend, ImageBackend, VideoBackend},
};
use std::{net::SocketAddr, sync::Arc};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "merchify-server")]
#[command(about = "Merchify backend: mockup generation and Shopify checkout", long_about = None)]
struct Cli {
    /// Server port to listen on
    #[arg(short, long, env = "SERVER_PORT", default_value = "3000")]
    port: u16,

    /// Server host to bind to
    #[arg(long, env = "SERVER_HOST", default_value = "0.0.0.0")]
    host: String,

    /// Video backend type (mock, mux)
    #[arg(long, env = "VIDEO_BACKEND", default_value = "mock")]
    video_backend: String,

    /// Image-generation backend type (mock, gemini)
    #[arg(long, env = "IMAGE_BACKEND", default_value = "mock")]
    image_backend: String,

    /// Commerce backend type (mock, shopify)
    #[arg(long, env = "COMMERCE_BACKEND", default_value = "mock")]
    commerce_backend: String,

    /// Mux access token id
    #[arg(long, env = "MUX_TOKEN_ID")]
    mux_token_id: Option<String>,

    /// Mux access token secret
    #[arg(long, env = "MUX_TOKEN_SECRET")]
    mux_token_secret: Option<String>,

    /// Gemini API key
    #[arg(long, env = "GEMINI_API_KEY")]
    gemini_api_key: Option<String>,

    /// Shopify store domain (e.g. my-store.myshopify.com)
    #[arg(long, env = "SHOPIFY_STORE_DOMAIN")]
    shopify_store_domain: Option<String>,

    /// Shopify Storefront API access token
    #[arg(long, env = "SHOPIFY_STOREFRONT_TOKEN")]
    shopify_storefront_token: Option<String>,

    /// Log filter (tracing EnvFilter syntax)
    #[arg(long, env = "RUST_LOG", default_value = "merchify=info,tower_http=info")]
    log_filter: String,
}

impl Cli {
    fn to_app_config(&self) -> Result<AppConfig> {
        let video_backend = match self.video_backend.as_str() {
            "mock" => VideoBackend::Mock,
            "mux" => {
                let token_id = self
                    .mux_token_id
                    .clone()
                    .context("MUX_TOKEN_ID is required for the mux backend")?;
                let token_secret = self
                    .mux_token_secret
                    .clone()
                    .context("MUX_TOKEN_SECRET is required for the mux backend")?;

                VideoBackend::Mux {
                    token_id,
                    token_secret,
                }
            }
            _ => anyhow::bail!("Unknown video backend: {}", self.video_backend),
        };

        let image_backend = match self.image_backend.as_str() {
            "mock" => ImageBackend::Mock,
            "gemini" => {
                let api_key = self
                    .gemini_api_key
                    .clone()
                    .context("GEMINI_API_KEY is required for the gemini backend")?;

                ImageBackend::Gemini { api_key }
            }
            _ => anyhow::bail!("Unknown image backend: {}", self.image_backend),
        };

        let commerce_backend = match self.commerce_backend.as_str() {
            "mock" => CommerceBackend::Mock,
            "shopify" => {
                let store_domain = self
                    .shopify_store_domain
                    .clone()
                    .context("SHOPIFY_STORE_DOMAIN is required for the shopify backend")?;
                let storefront_token = self
                    .shopify_storefront_token
                    .clone()
                    .context("SHOPIFY_STOREFRONT_TOKEN is required for the shopify backend")?;

                CommerceBackend::Shopify {
                    store_domain,
                    storefront_token,
                }
            }
            _ => anyhow::bail!("Unknown commerce backend: {}", self.commerce_backend),
        };

        Ok(AppConfig {
            video_backend,
            image_backend,
            commerce_backend,
        })
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&cli.log_filter))
        .init();

    info!("Starting Merchify server");
    info!("Video backend: {}", cli.video_backend);
    info!("Image backend: {}", cli.image_backend);
    info!("Commerce backend: {}", cli.commerce_backend);

    let config = cli.to_app_config()?;

    let services = AppBuilder::new()
        .with_config(config)
        .build()
        .context("Failed to build application")?;

    let state = AppState {
        video_service: Arc::new(services.video_service),
        image_service: Arc::new(services.image_service),
        commerce_service: Arc::new(services.commerce_service),
    };

    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", cli.host, cli.port).parse()?;
    let listener = TcpListener::bind(addr).await?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, router)
        .await
        .context("Failed to start server")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::parse_from([
            "merchify-server",
            "--port",
            "8080",
            "--commerce-backend",
            "shopify",
            "--shopify-store-domain",
            "test.myshopify.com",
            "--shopify-storefront-token",
            "token",
        ]);

        assert_eq!(cli.port, 8080);
        assert_eq!(cli.commerce_backend, "shopify");
        assert_eq!(
            cli.shopify_store_domain,
            Some("test.myshopify.com".to_string())
        );
    }

    #[test]
    fn test_mock_config() {
        let cli = Cli::parse_from(["merchify-server"]);

        let config = cli.to_app_config().unwrap();
        assert!(matches!(config.video_backend, VideoBackend::Mock));
        assert!(matches!(config.image_backend, ImageBackend::Mock));
        assert!(matches!(config.commerce_backend, CommerceBackend::Mock));
    }

    #[test]
    fn test_live_backend_requires_credentials() {
        let cli = Cli::parse_from(["merchify-server", "--commerce-backend", "shopify"]);
        assert!(cli.to_app_config().is_err());
    }
}
