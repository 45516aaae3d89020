use dotenv::dotenv;
use taskmaster::commands::Cli;
use taskmaster::libs::messages::macros::is_debug_mode;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    // Messages only go through tracing in debug mode.
    if is_debug_mode() {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("taskmaster=debug"));
        tracing_subscriber::registry().with(fmt::layer()).with(filter).init();
    }

    Cli::menu().await
}
