use thiserror::Error;

#[derive(Error, Debug)]
pub enum SubmissionError {
    #[error("Please fill required fields: {0}")]
    MissingFields(String),

    #[error("Email send failed: {0}")]
    Send(String),

    #[error("Email send failed with status {0}")]
    Status(u16),
}
