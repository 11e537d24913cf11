use lambda_runtime::{service_fn, Error};
use std::env;
use tracing::info;

// Lambda boundary: logging around the shared handler
mod handlers;


#[tokio::main]
async fn main() -> Result<(), Error> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()))
        .init();

    info!("Starting Greeting Lambda");

    lambda_runtime::run(service_fn(handlers::handler)).await?;
    Ok(())
}
