use std::fmt;

/// Result of loading remote or on-disk data for a view.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FetchState<T> {
    #[default]
    Loading,
    Error {
        message: String,
    },
    Ready(T),
}

impl<T> FetchState<T> {
    pub fn error(message: impl Into<String>) -> Self {
        FetchState::Error {
            message: message.into(),
        }
    }

    pub fn from_result<E: fmt::Display>(result: Result<T, E>) -> Self {
        match result {
            Ok(data) => FetchState::Ready(data),
            Err(err) => FetchState::error(err.to_string()),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, FetchState::Ready(_))
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            FetchState::Ready(data) => Some(data),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            FetchState::Error { message } => Some(message),
            _ => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> FetchState<U> {
        match self {
            FetchState::Loading => FetchState::Loading,
            FetchState::Error { message } => FetchState::Error { message },
            FetchState::Ready(data) => FetchState::Ready(f(data)),
        }
    }

    /// The loaded data, or `fallback` while loading or after an error.
    pub fn ready_or(self, fallback: T) -> T {
        match self {
            FetchState::Ready(data) => data,
            _ => fallback,
        }
    }
}
