use thiserror::Error;

#[derive(Debug, Error)]
pub enum AdapterError {
    #[error("Failed to translate invocation event: {0}")]
    Translation(String),

    #[error("Failed to dispatch request to application: {0}")]
    Dispatch(String),

    #[error("Failed to serialize payload: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for AdapterError {
    fn from(error: serde_json::Error) -> Self {
        AdapterError::Serialization(error.to_string())
    }
}

impl From<axum::http::Error> for AdapterError {
    fn from(error: axum::http::Error) -> Self {
        AdapterError::Translation(error.to_string())
    }
}

impl From<base64::DecodeError> for AdapterError {
    fn from(error: base64::DecodeError) -> Self {
        AdapterError::Translation(format!("invalid base64 body: {}", error))
    }
}

impl From<axum::Error> for AdapterError {
    fn from(error: axum::Error) -> Self {
        AdapterError::Dispatch(error.to_string())
    }
}
