use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{}", not_found_message(.ids))]
    NotFound { ids: Vec<String> },

    #[error("duplicate entry id: {0}")]
    DuplicateId(String),

    #[error("entry at position {0} has an empty id")]
    EmptyId(usize),

    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
}

fn not_found_message(ids: &[String]) -> String {
    match ids {
        [id] => format!("entry not found: {id}"),
        _ => format!("entries not found: {}", ids.join(", ")),
    }
}

pub type Result<T> = std::result::Result<T, Error>;
