//! Response envelope of the platform API and the client-side error taxonomy.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::list::ListResult;

/// Message shown when the backend reports a failure without one.
pub const GENERIC_FAILURE: &str = "Request failed";

/// `{success, data?, message?}`: every endpoint answers with this shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Success with a payload; anything else is an error.
    pub fn into_data(self) -> Result<T, ApiError> {
        if !self.success {
            return Err(ApiError::Application {
                message: self.message,
            });
        }
        self.data
            .ok_or_else(|| ApiError::Decode("response has no data".to_string()))
    }

    /// Success where the payload is optional (save, delete).
    pub fn into_ack(self) -> Result<Option<T>, ApiError> {
        if self.success {
            Ok(self.data)
        } else {
            Err(ApiError::Application {
                message: self.message,
            })
        }
    }
}

/// `data` of the list endpoint: `{data: T[], total, totalPages}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListPayload<T> {
    pub data: Vec<T>,
    #[serde(default)]
    pub total: usize,
    #[serde(default)]
    pub total_pages: usize,
}

impl<T> ListPayload<T> {
    /// The page and page size are the ones that were requested; the server
    /// only echoes the totals.
    pub fn into_result(self, page: usize, page_size: usize) -> ListResult<T> {
        ListResult::new(self.data, self.total, page, page_size)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a readable response.
    #[error("network error: {0}")]
    Transport(String),

    /// Transport succeeded but the backend answered `success: false`.
    #[error("application error: {}", .message.as_deref().unwrap_or(GENERIC_FAILURE))]
    Application { message: Option<String> },

    #[error("HTTP {status}")]
    Http { status: u16, message: Option<String> },

    #[error("invalid response: {0}")]
    Decode(String),

    #[error("not authenticated")]
    Unauthenticated,
}

impl ApiError {
    /// Text for the error notification. Backend messages are shown verbatim.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Application { message } | ApiError::Http { message, .. } => message
                .as_deref()
                .map(str::trim)
                .filter(|m| !m.is_empty())
                .unwrap_or(GENERIC_FAILURE)
                .to_string(),
            ApiError::Transport(_) => "Network error, please try again".to_string(),
            ApiError::Decode(_) => "Unexpected response from server".to_string(),
            ApiError::Unauthenticated => "Session expired, please sign in again".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_list_envelope() {
        let raw = json!({
            "success": true,
            "data": { "data": [1, 2, 3], "total": 23, "totalPages": 3 }
        });
        let response: ApiResponse<ListPayload<u32>> = serde_json::from_value(raw).unwrap();
        let result = response.into_data().unwrap().into_result(3, 10);
        assert_eq!(result.items, vec![1, 2, 3]);
        assert_eq!(result.total, 23);
        assert_eq!(result.total_pages(), 3);
    }

    #[test]
    fn test_application_failure_keeps_message() {
        let raw = json!({ "success": false, "message": "Duplicate code" });
        let response: ApiResponse<serde_json::Value> = serde_json::from_value(raw).unwrap();
        let err = response.into_ack().unwrap_err();
        assert_eq!(
            err,
            ApiError::Application {
                message: Some("Duplicate code".to_string())
            }
        );
        assert_eq!(err.user_message(), "Duplicate code");
    }

    #[test]
    fn test_failure_without_message_uses_fallback() {
        let raw = json!({ "success": false });
        let response: ApiResponse<serde_json::Value> = serde_json::from_value(raw).unwrap();
        assert_eq!(response.into_data().unwrap_err().user_message(), GENERIC_FAILURE);

        let blank = ApiError::Http {
            status: 500,
            message: Some("  ".to_string()),
        };
        assert_eq!(blank.user_message(), GENERIC_FAILURE);
    }

    #[test]
    fn test_success_without_data() {
        let raw = json!({ "success": true });
        let response: ApiResponse<serde_json::Value> = serde_json::from_value(raw).unwrap();
        assert!(matches!(response.clone().into_ack(), Ok(None)));
        assert!(matches!(response.into_data(), Err(ApiError::Decode(_))));
    }
}
