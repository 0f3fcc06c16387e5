use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to encode documents: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum RouteError {
    #[error("Unknown route: {0}")]
    UnknownRoute(String),

    #[error("Missing document id in route: {0}")]
    MissingDocumentId(String),

    #[error("Malformed query parameter: {0}")]
    MalformedQuery(String),
}
