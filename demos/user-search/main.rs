//! Searches GitHub users from the terminal.
//!
//! Type a keyword and press enter, then tab to the pager and browse with the
//! arrow keys. Settings are read from the TOML file named by
//! `USERSEARCH_CONFIG`; logs go to `user-search.log` (filter with `RUST_LOG`).

use bubbletea_rs::Program;
use bubbletea_usersearch::search::Model as SearchScreen;
use std::fs::File;
use std::sync::Mutex;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // The terminal belongs to the UI, so logs go to a file.
    let log = File::create("user-search.log")?;
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bubbletea_usersearch=debug".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(log)),
        )
        .init();

    info!("starting user search");
    let program = Program::<SearchScreen>::builder().alt_screen(true).build()?;
    program.run().await?;
    Ok(())
}
