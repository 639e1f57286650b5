use folio_common::error::LoadError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("config error: {0}")]
    Config(String),

    #[error("could not write output: {0}")]
    Io(#[from] std::io::Error),
}
