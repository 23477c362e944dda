//! Response envelope shared by every API route

use serde::Serialize;

/// `{"data": ..., "error": [...]}`, each key omitted when empty
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub error: Vec<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            data: Some(data),
            error: Vec::new(),
        }
    }

    pub fn error(messages: Vec<String>) -> Self {
        Self {
            data: None,
            error: messages,
        }
    }
}
