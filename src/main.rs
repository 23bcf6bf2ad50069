use anyhow::Context;
use clap::Parser;

use car_gallery::cli::Cli;
use car_gallery::config::ConfigStore;
use car_gallery::ui::render::plain_listing;
use car_gallery::{loader, logging, source, ui};

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_tracing();

    let store = ConfigStore::open(cli.config_path())?;
    store.update(|config| cli.apply(config))?;
    let config = store.get();
    tracing::info!(path = %store.path().display(), source = ?config.source.kind, "Config loaded");

    let source = source::from_config(&config.source).context("Failed to set up vehicle source")?;

    if cli.print {
        let vehicles = loader::fetch_or_empty(source.as_ref()).await;
        print!("{}", plain_listing(&vehicles, &config.contact));
        return Ok(());
    }

    ui::runtime::run(config, source)
        .await
        .context("Terminal page failed")?;
    Ok(())
}
