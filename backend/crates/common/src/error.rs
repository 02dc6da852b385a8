use thiserror::Error;

#[derive(Debug, Error)]
pub enum CopoError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("database error: {0}")]
    Database(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type CopoResult<T> = Result<T, CopoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_category_prefix() {
        let err = CopoError::Config("PORT is not a number".to_string());
        assert_eq!(err.to_string(), "configuration error: PORT is not a number");
        let err = CopoError::NotFound("history entry".to_string());
        assert_eq!(err.to_string(), "not found: history entry");
    }
}
