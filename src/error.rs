pub type ApiError = Box<dyn std::error::Error + Send + Sync + 'static>;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("authentication error: {message}")]
    Authentication {
        message: String,
        #[source]
        source: Option<std::io::Error>,
    },

    #[error("failed to list watched repositories (page {page})")]
    ListWatched {
        page: u32,
        #[source]
        source: ApiError,
    },

    #[error("failed to unsubscribe from {owner}/{repo}")]
    Unsubscribe {
        owner: String,
        repo: String,
        #[source]
        source: ApiError,
    },
}

impl Error {
    pub(crate) fn authentication(message: impl Into<String>) -> Self {
        Error::Authentication {
            message: message.into(),
            source: None,
        }
    }

    pub(crate) fn credential_read(message: impl Into<String>, source: std::io::Error) -> Self {
        Error::Authentication {
            message: message.into(),
            source: Some(source),
        }
    }
}
