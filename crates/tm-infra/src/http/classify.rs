//! Maps HTTP failures onto the three-way [`ApiError`] shape.

use reqwest::StatusCode;
use serde::Deserialize;
use tm_core::ApiError;

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// Non-success response: a JSON body with an `error` string is a known
/// backend error, anything else is unclassified.
pub(crate) fn classify_status(status: StatusCode, body: &[u8]) -> ApiError {
    match serde_json::from_slice::<ErrorBody>(body) {
        Ok(known) => ApiError::known(status.as_u16(), known.error),
        Err(_) => ApiError::unknown(
            Some(status.as_u16()),
            format!(
                "unexpected response {}: {}",
                status,
                String::from_utf8_lossy(body).chars().take(200).collect::<String>()
            ),
        ),
    }
}

/// The request never produced a usable response.
pub(crate) fn classify_transport(err: reqwest::Error) -> ApiError {
    ApiError::unknown(err.status().map(|s| s.as_u16()), err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_error_body_is_known() {
        let err = classify_status(StatusCode::NOT_FOUND, br#"{"error":"snapshot_not_found"}"#);
        assert_eq!(err, ApiError::known(404, "snapshot_not_found"));
    }

    #[test]
    fn test_other_bodies_are_unknown() {
        let err = classify_status(StatusCode::BAD_GATEWAY, b"<html>upstream down</html>");
        assert!(err.is_unknown());
        assert_eq!(err.status(), Some(502));

        let err = classify_status(StatusCode::INTERNAL_SERVER_ERROR, br#"{"detail":"x"}"#);
        assert!(err.is_unknown());
    }
}
