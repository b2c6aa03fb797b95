use thiserror::Error;

#[derive(Debug, Error)]
pub enum BookError {
    #[error("{field} cannot be blank")]
    BlankField { field: String },

    #[error("{field} is not valid: {reason}")]
    InvalidField { field: String, reason: String },

    #[error("{entity_type} not found: {id}")]
    NotFound { entity_type: String, id: String },

    #[error("Cannot read birthday '{value}', expected DD.MM.YYYY")]
    InvalidBirthday { value: String },

    #[error("Contact id {id} leaves no room for further ids")]
    IdOverflow { id: u64 },

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl BookError {
    pub fn contact_not_found(id: impl ToString) -> Self {
        BookError::NotFound {
            entity_type: "Contact".into(),
            id: id.to_string(),
        }
    }

    /// True for errors caused by bad user input rather than the environment.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            BookError::BlankField { .. } | BookError::InvalidField { .. } | BookError::InvalidBirthday { .. }
        )
    }
}

pub type BookResult<T> = Result<T, BookError>;
