//! Response interpretation: HTTP status and body to a typed result.

use serde_json::Value;

use crate::error::ApiError;

/// Map a raw transport response to a success payload or a typed error.
///
/// A 200 body is JSON-decoded; an object carrying an `error` key is an
/// application-level failure even though the transport succeeded. 202 is the
/// legacy accepted-without-body status and maps to `true`. Everything else
/// is an error carrying enough context (status, body, request path) to
/// diagnose without re-running.
pub(crate) fn interpret(status: u16, body: &str, path: &str) -> Result<Value, ApiError> {
    match status {
        200 => {
            let decoded: Value = serde_json::from_str(body)?;
            if let Some(error) = decoded.get("error") {
                return Err(response_error(error));
            }
            Ok(decoded)
        }
        202 => Ok(Value::Bool(true)),
        400 => Err(ApiError::Server(format!("Bad request: {body}"))),
        401 => Err(ApiError::Authentication(body.to_string())),
        404 => Err(ApiError::Server(format!("404 Not found ({path})"))),
        407 => Err(ApiError::Server("Proxy Authentication Required".to_string())),
        other => Err(ApiError::Server(format!(
            "Unknown error (status code {other}): {body}"
        ))),
    }
}

/// Extract `{code, message}` from a nested error object.
fn response_error(error: &Value) -> ApiError {
    let code = error.get("code").and_then(Value::as_i64).unwrap_or(0);
    let message = error
        .get("message")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    ApiError::Response { code, message }
}
