use clap::Parser;

use passfetch::commands::Cli;
use passfetch::{env, logging};

#[tokio::main]
async fn main() -> miette::Result<()> {
    miette::set_panic_hook();

    // Provider for https endpoints
    let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();

    // Must happen before parsing so clap's env fallbacks see .env values
    let dotenv_path = env::load_dotenv();

    let cli = Cli::parse();

    if cli.no_color {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }

    logging::init(&cli)?;

    if let Some(path) = dotenv_path {
        tracing::debug!("Loaded environment from {}", path.display());
    }

    cli.run().await.map_err(miette::Report::new)
}
