//! Study session server binary
//!
//! Run with: cargo run --bin studykit-server

use studykit::{config::AppConfig, server::AppServer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "studykit=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::default();

    tracing::info!("Configuration loaded");
    tracing::info!("  - Generator backend: {:?}", config.generator.backend);
    tracing::info!("  - Per-file limit: {} bytes", config.upload.max_file_size);

    let server = AppServer::new(config)?;

    println!("Server starting on http://{}", server.address());
    println!("\nEndpoints:");
    println!("  POST /upload        - Upload documents");
    println!("  GET  /summary       - Summarize the session corpus");
    println!("  GET  /questionnaire - Generate a questionnaire");
    println!("  POST /chat          - Ask a question");
    println!("  POST /end-session   - Clear the session");
    println!("\nPress Ctrl+C to stop\n");

    server.start().await?;

    Ok(())
}
