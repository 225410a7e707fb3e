pub type PaginatorResult<T> = Result<T, PaginatorError>;

/// Rejected paginator configuration.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("cannot paginate an empty item list")]
    EmptyItems,
    #[error("items per page must be greater than 0")]
    ZeroPageSize,
    #[error("initial page {page} is out of range, expected 0..{total}")]
    InitialPageOutOfRange { page: usize, total: usize },
}

/// Failure reported by a [`MessageSink`](crate::sink::MessageSink).
#[derive(thiserror::Error, Debug)]
pub enum SinkError {
    #[error("message not found")]
    NotFound,
    #[error("missing access to message")]
    Forbidden,
    #[error(transparent)]
    Transport(Box<dyn std::error::Error + Send + Sync>),
}

impl SinkError {
    pub fn transport(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Box::new(source))
    }

    /// Whether the message is gone or out of reach, as opposed to a
    /// transport failure the caller has to see.
    pub fn is_ignorable(&self) -> bool {
        matches!(self, Self::NotFound | Self::Forbidden)
    }
}

#[derive(thiserror::Error, Debug)]
pub enum PaginatorError {
    #[error("invalid paginator configuration")]
    Config(#[from] ConfigError),
    #[error("page {page} is out of range, expected 0..{total}")]
    PageOutOfRange { page: usize, total: usize },
    #[error("message sink request failed")]
    Sink(#[from] SinkError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_missing_messages_are_ignorable() {
        assert!(SinkError::NotFound.is_ignorable());
        assert!(SinkError::Forbidden.is_ignorable());

        let io = std::io::Error::other("connection reset");
        assert!(!SinkError::transport(io).is_ignorable());
    }

    #[test]
    fn config_error_wraps_into_paginator_error() {
        let err = PaginatorError::from(ConfigError::InitialPageOutOfRange { page: 4, total: 4 });
        assert!(matches!(
            err,
            PaginatorError::Config(ConfigError::InitialPageOutOfRange { page: 4, total: 4 })
        ));
        assert_eq!(err.to_string(), "invalid paginator configuration");
    }
}
