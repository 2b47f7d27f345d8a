use http::uri::InvalidUri;
use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Store(#[from] object_store::Error),

    #[error(transparent)]
    InvalidUri(#[from] InvalidUri),

    #[error("Creating storage provider: {0}")]
    ProviderCreation(#[from] eyre::Report),
}
