//! Error types for session construction and content loading.
//!
//! Illegal moves are not errors: every engine reports them as a
//! `Rejected(..)` variant of its own result type and leaves its state
//! untouched. These errors cover broken preconditions instead, such as
//! too few players at the table or a content source with nothing in it.

/// Errors raised while loading words, cards or board graphs.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("no words available for category {0:?}")]
    EmptyWordList(String),

    #[error("the {0} deck is empty")]
    EmptyDeck(&'static str),

    #[error("no {0} content configured")]
    Missing(&'static str),

    #[error("invalid board: {0}")]
    InvalidBoard(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors raised when a session cannot start.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("need at least {needed} players, found {found}")]
    NotEnoughPlayers { needed: usize, found: usize },

    #[error("{0} is already in the game")]
    DuplicatePlayer(String),

    #[error("invalid config: {0}")]
    InvalidConfig(&'static str),

    #[error("content error: {0}")]
    Content(#[from] ContentError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_error_display() {
        let err = ContentError::EmptyWordList("animals".into());
        assert_eq!(err.to_string(), "no words available for category \"animals\"");

        let err = ContentError::EmptyDeck("black card");
        assert_eq!(err.to_string(), "the black card deck is empty");
    }

    #[test]
    fn test_session_error_display() {
        let err = SessionError::NotEnoughPlayers { needed: 3, found: 2 };
        assert_eq!(err.to_string(), "need at least 3 players, found 2");
    }

    #[test]
    fn test_content_error_converts() {
        let err: SessionError = ContentError::InvalidBoard("dangling link".into()).into();
        assert!(err.to_string().contains("dangling link"));
    }
}
