use std::path::PathBuf;

use clap::Parser;
use log::info;

use weardmgmt::config::Config;
use weardmgmt::logging::setup_logging;
use weardmgmt::prerender::{self, PrerenderOptions};
use weardmgmt::roster::SheetClient;

/// Write SEO snapshots of every creator profile plus sitemap.xml into the
/// built site directory, ready to upload as-is.
#[derive(Parser)]
#[command(name = "prerender", about = "Generate static creator pages and sitemap.xml")]
struct Args {
    /// Built site directory containing index.html
    #[arg(long, default_value = "dist")]
    dist: PathBuf,

    /// Path to the config file (defaults to weardmgmt.conf next to the binary)
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::new()?,
    };
    setup_logging(config.log_level)?;

    info!("Prerendering into {}", args.dist.display());
    let source = SheetClient::new(config.sheet_url.clone())?;
    let options = PrerenderOptions {
        dist_dir: args.dist,
        site_url: config.site_url.clone(),
    };
    prerender::run(&options, &source, &config.roster).await
}
