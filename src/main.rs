mod cli;
mod commands;
mod render;

use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cli::{Command, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Config::parse_args();

    // Setup logging
    setup_logging(cli.debug);

    // Load settings (file, then CLI overrides)
    let settings = cli.load_settings()?;

    match cli.command {
        Command::Run(args) => commands::run(settings, args).await,
        Command::Models => commands::models(&settings),
        Command::Recommend => commands::recommend(&settings),
        Command::Validate => commands::validate(&settings),
        Command::Export => commands::export(&settings),
        Command::Import { file } => commands::import(&settings, &file),
    }
}

fn setup_logging(debug: bool) {
    let filter = if debug {
        EnvFilter::new("devteam=debug,devteam_core=debug")
    } else {
        EnvFilter::new("devteam=info,devteam_core=info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();
}
