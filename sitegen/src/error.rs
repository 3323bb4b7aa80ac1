//! Errors raised while loading configuration or writing pages.

use std::path::PathBuf;

use landing_pages::UnknownSite;

#[derive(Debug, thiserror::Error)]
pub enum SitegenError {
    #[error("failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error(transparent)]
    UnknownSite(#[from] UnknownSite),

    #[error("failed to serialize site content: {0}")]
    Json(#[from] serde_json::Error),
}

impl SitegenError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
