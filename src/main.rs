// src/main.rs
use paradiv::api::start_api_server;
use paradiv::config::ApiConfig;
use paradiv::ParagraphDivider;
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ApiConfig::from_env();

    let divider = ParagraphDivider::from_env();
    if !divider.is_ready() {
        println!("⚠️ OPENAI_API_KEY not configured; /api/divide will return 503");
    }

    println!("🚀 Starting API server on http://{} ...", config.bind_addr());
    start_api_server(&config, divider).await
}
