use std::io;

#[derive(Debug, thiserror::Error)]
pub enum HealthError {
    #[error("Failed to parse health payload: {0}")]
    Payload(#[from] serde_json::Error),

    #[error("Status for service {service} is not a string")]
    NonStringStatus { service: String },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}
