use std::future::Future;
use std::sync::Arc;

use log::info;
use tokio::sync::RwLock;
use warp::Filter;

use crate::config::Config;
use crate::outbound::Mailer;
use crate::roster::RosterManager;
use crate::web_ui::api_routes::api_routes;

/// Serves the built SPA and the read-only roster API. Unknown paths fall
/// back to `index.html`, where the client router resolves them to home.
pub struct WebUI {
    config: Arc<RwLock<Config>>,
    roster: Arc<RosterManager>,
    mailer: Arc<Mailer>,
}

impl WebUI {
    pub fn new(config: Arc<RwLock<Config>>, roster: Arc<RosterManager>, mailer: Arc<Mailer>) -> Self {
        WebUI { config, roster, mailer }
    }

    pub async fn run(
        &self,
        shutdown_signal: impl Future<Output = ()> + Send + 'static,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let config_read = self.config.read().await;
        let host = config_read.web_host.clone().unwrap_or_else(|| "127.0.0.1".to_string());
        let port = config_read.web_port.unwrap_or(8080);
        let static_dir = config_read.static_dir.clone().unwrap_or_else(|| "dist".to_string());
        drop(config_read);

        let api = api_routes(self.roster.clone(), self.mailer.clone());
        let static_files = warp::fs::dir(static_dir.clone());
        let spa_fallback = warp::fs::file(format!("{}/index.html", static_dir));

        let routes = api
            .or(static_files)
            .or(spa_fallback)
            .with(warp::log::custom(move |info| {
                info!("Request: {} {} {}", info.method(), info.path(), info.status().as_u16());
            }));

        let addr: std::net::SocketAddr = format!("{}:{}", host, port).parse()?;
        info!("Starting web server on {}", addr);

        let (_, server) = warp::serve(routes).bind_with_graceful_shutdown(addr, shutdown_signal);
        server.await;

        info!("Web server has shut down.");
        Ok(())
    }
}
