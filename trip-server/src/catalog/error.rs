//! Catalog loading error types.

/// Errors that can occur when loading the catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Reading the catalog file failed
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Catalog JSON is malformed
    #[error("catalog JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Two destinations share an id
    #[error("duplicate destination id: {0}")]
    DuplicateDestination(String),

    /// A hotel references a destination that is not in the catalog
    #[error("hotel {hotel} references unknown destination {destination}")]
    UnknownHotelDestination { hotel: String, destination: String },
}
