use thiserror::Error;

pub type BeaconResult<T> = Result<T, BeaconError>;

#[derive(Error, Debug)]
pub enum BeaconError {
    #[error("Invalid ingest endpoint: {0}")]
    Endpoint(#[from] url::ParseError),

    #[error("Envelope serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Event delivery error: {0}")]
    Transport(#[from] reqwest::Error),
}
