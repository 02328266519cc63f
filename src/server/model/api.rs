use serde::{Deserialize, Serialize};

/// Error payload returned by every failing endpoint.
#[derive(Serialize, Deserialize)]
pub struct ErrorDto {
    pub error: String,
}

/// Simple acknowledgement payload for operations with no data to return.
#[derive(Serialize, Deserialize)]
pub struct AckDto {
    pub message: String,
}

impl AckDto {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
