//! Shared HTTP response helpers.
//!
//! Centralizes status-code checks (401 → [`ApiError::Unauthorized`],
//! other non-success → [`ApiError::Api`]) and body decoding so the resource
//! modules stay focused on paths and payloads.

use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// Check a response for error statuses. Returns it unchanged on success.
///
/// A 401 is logged and surfaced as [`ApiError::Unauthorized`]; it is never
/// retried.
pub async fn check_response(
    resp: reqwest::Response,
    endpoint: &str,
) -> Result<reqwest::Response, ApiError> {
    let status = resp.status();
    if status == reqwest::StatusCode::UNAUTHORIZED {
        tracing::warn!(endpoint, "backend rejected credentials (401)");
        return Err(ApiError::Unauthorized {
            endpoint: endpoint.to_string(),
        });
    }
    if !status.is_success() {
        let message = resp.text().await.unwrap_or_default();
        tracing::warn!(endpoint, status = status.as_u16(), %message, "backend returned an error");
        return Err(ApiError::Api {
            status: status.as_u16(),
            message,
        });
    }
    Ok(resp)
}

/// Read the whole body and decode it as JSON.
pub async fn read_json<T: DeserializeOwned>(
    resp: reqwest::Response,
    endpoint: &str,
) -> Result<T, ApiError> {
    let bytes = resp.bytes().await?;
    decode(&bytes, endpoint)
}

fn decode<T: DeserializeOwned>(bytes: &[u8], endpoint: &str) -> Result<T, ApiError> {
    serde_json::from_slice(bytes).map_err(|e| {
        tracing::warn!(endpoint, error = %e, "malformed response body");
        ApiError::Parse(format!("{endpoint}: {e}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mock_response(status: u16, body: &'static str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .body(body)
                .unwrap(),
        )
    }

    #[tokio::test]
    async fn unauthorized_maps_to_dedicated_variant() {
        let err = check_response(mock_response(401, ""), "students")
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Unauthorized { ref endpoint } if endpoint == "students"));
        assert!(err.is_unauthorized());
    }

    #[tokio::test]
    async fn server_error_carries_status_and_body() {
        let err = check_response(mock_response(500, "boom"), "lessons")
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ApiError::Api { status: 500, ref message } if message == "boom"
        ));
    }

    #[tokio::test]
    async fn not_found_is_an_api_error() {
        let err = check_response(mock_response(404, ""), "students/9")
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Api { status: 404, .. }));
    }

    #[tokio::test]
    async fn success_passes_through() {
        assert!(check_response(mock_response(204, ""), "x").await.is_ok());
    }

    #[tokio::test]
    async fn read_json_decodes_body() {
        let value: Vec<u32> = read_json(mock_response(200, "[1,2,3]"), "x").await.unwrap();
        assert_eq!(value, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn read_json_rejects_malformed_body() {
        let err = read_json::<Vec<u32>>(mock_response(200, "[1,2"), "students")
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Parse(ref m) if m.starts_with("students: ")));
    }
}
