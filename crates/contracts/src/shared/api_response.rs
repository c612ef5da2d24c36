use serde::{Deserialize, Serialize};

/// Envelope every backend endpoint wraps its payload in: `{ "data": ... }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub data: T,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_extra_fields() {
        let resp: ApiResponse<Vec<u32>> =
            serde_json::from_str(r#"{ "success": true, "message": "ok", "data": [1, 2] }"#)
                .unwrap();
        assert_eq!(resp.data, vec![1, 2]);
        assert_eq!(resp.success, Some(true));
        assert_eq!(resp.message.as_deref(), Some("ok"));
    }
}
