use thiserror::Error;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("Sheet fetch failed: {0}")]
    Fetch(String),

    #[error("Sheet fetch failed with status {0}")]
    Status(u16),

    #[error("CSV parse error: {0}")]
    Parse(String),
}
