pub mod config;
pub mod logging;
pub mod outbound;
pub mod prerender;
pub mod roster;
pub mod routes;
pub mod web_ui;

use std::sync::Arc;
use std::time::Duration;

use log::info;
use tokio::sync::RwLock;

use crate::config::Config;
use crate::outbound::Mailer;
use crate::roster::{starter_roster, RosterManager, SheetClient};
use crate::web_ui::WebUI;

/// Everything the running site needs: the live roster store, the
/// contact-form relay, and the shared configuration behind them.
pub struct AppContext {
    pub config: Arc<RwLock<Config>>,
    pub roster: Arc<RosterManager>,
    pub mailer: Arc<Mailer>,
}

pub async fn init(config: Arc<RwLock<Config>>) -> Result<AppContext, Box<dyn std::error::Error + Send + Sync>> {
    let (sheet_url, settings, refresh_interval) = {
        let config_read = config.read().await;
        (
            config_read.sheet_url.clone(),
            config_read.roster.clone(),
            Duration::from_secs(config_read.refresh_interval_secs),
        )
    };

    let source = Arc::new(SheetClient::new(sheet_url)?);
    let roster = RosterManager::new(source, settings, starter_roster());
    roster.start(refresh_interval).await;
    info!("Roster store started, refreshing every {:?}", refresh_interval);

    let mailer = Arc::new(Mailer::new(Arc::clone(&config))?);

    Ok(AppContext {
        config,
        roster,
        mailer,
    })
}

pub async fn run(context: AppContext) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let web_ui = WebUI::new(
        Arc::clone(&context.config),
        Arc::clone(&context.roster),
        Arc::clone(&context.mailer),
    );

    info!("Site is now running. Press Ctrl+C to exit.");
    web_ui
        .run(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("Received Ctrl+C, shutting down.");
        })
        .await?;

    context.roster.shutdown().await;
    info!("Site has shut down.");
    Ok(())
}
