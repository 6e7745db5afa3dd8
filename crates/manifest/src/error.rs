use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("error parsing XML: {0}")]
    Xml(#[from] roxmltree::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
