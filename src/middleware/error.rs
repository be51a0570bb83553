use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AppError {
    Generic { description: String },
    EntityFailIdNotFound { ident: String },
    LikeAuthorNotMatch { user: String, id: String },
    SurrealDb { source: String },
    SurrealDbNoResult { source: String, id: String },
}

/// Any error raised by the store. Translation into a response is left to the caller.
pub type AppResult<T> = core::result::Result<T, AppError>;

impl std::error::Error for AppError {}

impl AppError {
    /// Ownership failures, which callers usually map to a forbidden response.
    pub fn is_not_allowed(&self) -> bool {
        matches!(self, Self::LikeAuthorNotMatch { .. })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::EntityFailIdNotFound { .. })
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Generic { description } => write!(f, "{description}"),
            Self::EntityFailIdNotFound { ident } => {
                write!(f, "Like {ident} does not exist!")
            }
            Self::LikeAuthorNotMatch { user, id } => {
                write!(f, "{user} is not the author of like {id}!")
            }
            Self::SurrealDb { source } => write!(f, "{source}"),
            Self::SurrealDbNoResult { id, .. } => write!(f, "No result for id {id}"),
        }
    }
}

impl From<surrealdb::Error> for AppError {
    fn from(value: surrealdb::Error) -> Self {
        Self::SurrealDb {
            source: value.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ownership_error_names_user_and_like() {
        let err = AppError::LikeAuthorNotMatch {
            user: "u2".to_string(),
            id: "01J9ZK".to_string(),
        };
        assert_eq!(err.to_string(), "u2 is not the author of like 01J9ZK!");
        assert!(err.is_not_allowed());
        assert!(!err.is_not_found());
    }

    #[test]
    fn not_found_is_not_an_ownership_error() {
        let err = AppError::EntityFailIdNotFound {
            ident: "missing".to_string(),
        };
        assert!(err.is_not_found());
        assert!(!err.is_not_allowed());
        assert_eq!(err.to_string(), "Like missing does not exist!");
    }
}
