//! Errors raised while loading a route.
//!
//! None of these ever reach the user as a failure. The router logs them and falls back to the
//! not-found content instead.

use thiserror::Error;

/// A failure to produce content for a route key.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LoadError {
    /// The request never produced a response.
    #[error("transport error: {0}")]
    Transport(String),
    /// The server answered with a non-success status.
    #[error("HTTP error! status: {0}")]
    Status(u16),
    /// No entry in the route table matches the key.
    #[error("no route for {0:?}")]
    RouteNotFound(String),
}

impl LoadError {
    /// Whether this error came from retrieving a resource, as opposed to looking up a route.
    pub fn is_retrieval(&self) -> bool {
        match self {
            LoadError::Transport(_) | LoadError::Status(_) => true,
            LoadError::RouteNotFound(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retrieval_kinds() {
        assert!(LoadError::Transport("offline".to_owned()).is_retrieval());
        assert!(LoadError::Status(500).is_retrieval());
        assert!(!LoadError::RouteNotFound("/missing".to_owned()).is_retrieval());
    }

    #[test]
    fn status_message() {
        assert_eq!(LoadError::Status(404).to_string(), "HTTP error! status: 404");
        assert_eq!(
            LoadError::RouteNotFound("/missing".to_owned()).to_string(),
            "no route for \"/missing\"",
        );
    }
}
