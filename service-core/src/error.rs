use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(anyhow::Error),

    #[error("Not found: {0}")]
    NotFound(anyhow::Error),

    #[error("Internal error: {0}")]
    InternalError(#[from] anyhow::Error),

    #[error("Configuration error: {0}")]
    ConfigError(anyhow::Error),
}

impl AppError {
    /// Process exit code used by command-line entry points.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::BadRequest(_) => 2,
            AppError::NotFound(_) => 3,
            AppError::ConfigError(_) => 78,
            AppError::InternalError(_) => 1,
        }
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::ConfigError(anyhow::Error::new(err))
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::InternalError(anyhow::Error::new(err))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::BadRequest(anyhow::Error::new(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_are_distinct() {
        let codes = [
            AppError::BadRequest(anyhow::anyhow!("x")).exit_code(),
            AppError::NotFound(anyhow::anyhow!("x")).exit_code(),
            AppError::InternalError(anyhow::anyhow!("x")).exit_code(),
            AppError::ConfigError(anyhow::anyhow!("x")).exit_code(),
        ];
        for (i, a) in codes.iter().enumerate() {
            for b in &codes[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_json_error_is_bad_request() {
        let err: AppError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, AppError::BadRequest(_)));
        assert!(err.to_string().starts_with("Bad request"));
    }
}
