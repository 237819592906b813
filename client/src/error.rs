use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Pokemon name is empty")]
    EmptyName,

    #[error("No Pokemon named {0:?}")]
    NotFound(String),

    #[error("Lookup for {name:?} failed with status {status}")]
    Status {
        status: reqwest::StatusCode,
        name: String,
    },

    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),
}
