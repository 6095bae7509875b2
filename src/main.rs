use dotenvy::dotenv;
use promo_console::{
    client::PromotionServiceClient,
    config,
    console::{repl, Console},
    errors::Result,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Initialize tracing as early as possible
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Env vars can come from a .env file or be set externally
    dotenv().ok();

    let service_url = config::service_url()?;
    info!(url = %service_url, "connecting to promotion service");

    let client = PromotionServiceClient::new(&service_url);
    let mut console = Console::new(client);
    repl::run(&mut console).await
}
