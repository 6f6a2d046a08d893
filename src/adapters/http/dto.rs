//! Response envelopes shared by every route.

use serde::Serialize;

/// `{ "success": true, "data": ... }`; `data` is omitted for deletes.
#[derive(Debug, Clone, Serialize)]
pub struct SuccessResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> SuccessResponse<T> {
    pub fn with_data(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
        }
    }
}

impl SuccessResponse<()> {
    pub fn empty() -> Self {
        Self {
            success: true,
            data: None,
        }
    }
}

/// `{ "success": false, "error": "<message>" }`
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_success_has_no_data_key() {
        assert_eq!(
            serde_json::to_value(SuccessResponse::empty()).unwrap(),
            json!({"success": true})
        );
    }

    #[test]
    fn error_envelope_shape() {
        assert_eq!(
            serde_json::to_value(ErrorResponse::new("Non autorisé")).unwrap(),
            json!({"success": false, "error": "Non autorisé"})
        );
    }
}
