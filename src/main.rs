use std::sync::Arc;

use tokio::sync::RwLock;

use weardmgmt::config::Config;
use weardmgmt::logging::setup_logging;
use weardmgmt::{init, run};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = Config::new()?;
    setup_logging(config.log_level)?;

    let config = Arc::new(RwLock::new(config));
    let context = init(Arc::clone(&config)).await?;

    run(context).await?;

    Ok(())
}
