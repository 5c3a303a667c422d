mod adapters;
mod app;
mod core;
mod global_constants;
mod presentation;

use clap::Parser;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    log::info!("[MAIN] Starting {}", global_constants::APPLICATION_NAME);

    let cli = app::Cli::parse();
    let photo_album = app::PhotoAlbumApp::build(cli.config.as_deref())?;

    photo_album.run(cli.command).await
}
