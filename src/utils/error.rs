use thiserror::Error;

#[derive(Error, Debug)]
pub enum SeedError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid collection: {message}")]
    InvalidCollection { message: String },

    #[error("Invalid value for '{field}' ('{value}'): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl SeedError {
    pub fn invalid_collection(message: impl Into<String>) -> Self {
        SeedError::InvalidCollection {
            message: message.into(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            SeedError::IoError(_) => {
                "Run from the repository root or pass --collection with the export path"
            }
            SeedError::SerializationError(_) => {
                "Re-export the collection from Postman; the file is not valid JSON"
            }
            SeedError::InvalidCollection { .. } => {
                "Make sure the file is a Postman collection export with a top-level \"item\" array"
            }
            SeedError::InvalidConfigValueError { .. } => "Check the command line arguments",
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            SeedError::InvalidConfigValueError { .. } => 2,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, SeedError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        let config_error = SeedError::InvalidConfigValueError {
            field: "collection".to_string(),
            value: String::new(),
            reason: "Path cannot be empty".to_string(),
        };
        assert_eq!(config_error.exit_code(), 2);

        let io_error = SeedError::from(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing",
        ));
        assert_eq!(io_error.exit_code(), 1);
    }

    #[test]
    fn test_decode_error_surfaces_as_is() {
        let decode = serde_json::from_str::<serde_json::Value>("{ nope").unwrap_err();
        let expected = decode.to_string();
        let error = SeedError::from(decode);
        assert_eq!(error.to_string(), format!("Serialization error: {}", expected));
    }
}
