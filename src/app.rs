use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::adapters::{read_selected_file, ApiGatewayPhotoService, HtmlDocument, SystemClock};
use crate::core::models::{ClientConfig, Region};
use crate::core::orchestrators::PhotoClient;
use crate::global_constants;

#[derive(Parser, Debug)]
#[command(
    name = "photo-album",
    version,
    about = "Search and upload photos through the photo album API"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Path to a client_config.json to use instead of the default")]
    pub config: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Search photos by label
    Search {
        query: String,
        #[arg(long, help = "Write the rendered regions to this file instead of stdout")]
        output: Option<PathBuf>,
    },
    /// Upload a JPEG, PNG or GIF image
    Upload {
        file: PathBuf,
        #[arg(long, help = "Comma separated custom labels stored with the image")]
        labels: Option<String>,
    },
    /// Open an image URL in the system browser
    Open { url: String },
    /// Read one search query per line from stdin
    Interactive,
    /// Show the effective configuration
    Config {
        #[arg(long, help = "Write the effective configuration to the default location")]
        init: bool,
    },
}

pub struct PhotoAlbumApp {
    client: PhotoClient,
    document: Arc<HtmlDocument>,
}

impl PhotoAlbumApp {
    pub fn build(config_path: Option<&std::path::Path>) -> Result<Self> {
        let config = Arc::new(ClientConfig::load(config_path)?);
        let document = Arc::new(HtmlDocument::with_standard_layout());
        let photo_api = Arc::new(ApiGatewayPhotoService::new(Arc::clone(&config)));

        let client = PhotoClient::build(
            config,
            photo_api,
            document.clone(),
            Arc::new(SystemClock),
        );

        Ok(Self { client, document })
    }

    pub async fn run(&self, command: Command) -> Result<()> {
        match command {
            Command::Search { query, output } => self.handle_search(&query, output).await,
            Command::Upload { file, labels } => self.handle_upload(file, labels).await,
            Command::Open { url } => self.client.open_image(&url),
            Command::Interactive => self.handle_interactive().await,
            Command::Config { init } => self.handle_config(init),
        }
    }

    async fn handle_search(&self, query: &str, output: Option<PathBuf>) -> Result<()> {
        self.document.set_search_query(query);
        self.client
            .handle_search_key_press(global_constants::SEARCH_TRIGGER_KEY)
            .await;

        let rendered = self
            .document
            .render_regions(&[Region::SearchMessage, Region::Results]);

        match output {
            Some(path) => {
                tokio::fs::write(&path, rendered)
                    .await
                    .with_context(|| format!("Failed to write results to {:?}", path))?;
                log::info!("[APP] Wrote search results to {:?}", path);
            }
            None => print!("{}", rendered),
        }

        Ok(())
    }

    async fn handle_upload(&self, file: PathBuf, labels: Option<String>) -> Result<()> {
        let selected_file = read_selected_file(&file).await?;

        self.document.select_file(selected_file);
        self.client.handle_file_select();

        if !self.document.has_selected_file() {
            log::warn!("[APP] {:?} was rejected on selection, not uploading", file);
            print!("{}", self.document.render_regions(&[Region::UploadMessage]));
            return Ok(());
        }

        if let Some(labels) = labels {
            self.document.set_custom_labels(&labels);
        }
        self.client.upload_photo().await;

        print!("{}", self.document.render_regions(&[Region::UploadMessage]));
        Ok(())
    }

    async fn handle_interactive(&self) -> Result<()> {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        while let Some(line) = lines.next_line().await? {
            if line.trim() == global_constants::INTERACTIVE_QUIT_COMMAND {
                break;
            }

            self.document.set_search_query(&line);
            self.client
                .handle_search_key_press(global_constants::SEARCH_TRIGGER_KEY)
                .await;

            print!(
                "{}",
                self.document
                    .render_regions(&[Region::SearchMessage, Region::Results])
            );
        }

        log::info!("[APP] Interactive session ended");
        Ok(())
    }

    fn handle_config(&self, init: bool) -> Result<()> {
        let config = self.client.config();

        println!("api_endpoint: {}", config.api_endpoint);
        println!("api_key: {}", config.masked_api_key());
        println!("bucket_name: {}", config.bucket_name);
        for warning in config.placeholder_warnings() {
            println!("warning: {}", warning);
        }

        if init {
            let path = ClientConfig::get_config_file_path()?;
            config.save_to_path(&path)?;
            println!("wrote {}", path.display());
        }

        Ok(())
    }
}
