//! Response Validation
//!
//! Turns a raw RajaOngkir response into the payload or a typed error.
//!
//! The envelope is `{"rajaongkir": {"status": {...}, "results": ...}}`, but
//! some endpoints answer with a singular `result` instead, and a few with
//! neither. The checks below run in a fixed order: transport failure, empty
//! body, undecodable body, non-200 status, `results`, `result`, unknown.

use crate::error::{Result, WoongkirError};
use serde_json::Value;
use tracing::warn;

/// Decoded success payload, passed through untouched
pub type RateResult = Value;

/// Validate a transport outcome
pub fn validate_response(response: Result<String>) -> Result<RateResult> {
    let body = response?;
    validate_body(&body)
}

/// Validate a response body
pub fn validate_body(body: &str) -> Result<RateResult> {
    if body.is_empty() || body == "0" {
        warn!("RajaOngkir API response is empty");
        return Err(WoongkirError::EmptyResponse);
    }

    let data: Value = match serde_json::from_str(body) {
        Ok(data) if !is_falsy(&data) => data,
        _ => {
            warn!(body = %truncate(body), "RajaOngkir API response is not valid JSON");
            return Err(WoongkirError::InvalidResponse);
        }
    };

    let envelope = data.get("rajaongkir");

    if let Some(status) = present(envelope, "status") {
        let code = status.get("code").unwrap_or(&Value::Null);
        if code.as_i64() != Some(200) {
            let code = scalar_to_string(code);
            let message = scalar_to_string(status.get("description").unwrap_or(&Value::Null));
            warn!(%code, %message, "RajaOngkir API returned an error status");
            return Err(WoongkirError::Upstream { code, message });
        }
    }

    if let Some(results) = present(envelope, "results") {
        return Ok(results.clone());
    }

    if let Some(result) = present(envelope, "result") {
        return Ok(result.clone());
    }

    warn!(body = %truncate(body), "RajaOngkir API response has no results");
    Err(WoongkirError::UnknownError)
}

/// A non-null field of the envelope
fn present<'a>(envelope: Option<&'a Value>, field: &str) -> Option<&'a Value> {
    envelope
        .and_then(|e| e.get(field))
        .filter(|v| !v.is_null())
}

/// Decoded values that count as "no data": null, false, 0, "", "0", []
fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty() || s == "0",
        Value::Array(a) => a.is_empty(),
        Value::Object(_) => false,
    }
}

fn scalar_to_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(true) => "1".to_string(),
        Value::Bool(false) => String::new(),
        Value::Number(n) => match n.as_f64() {
            Some(f) if n.is_f64() && f.is_finite() && f.fract() == 0.0 => {
                format!("{}", f as i64)
            }
            _ => n.to_string(),
        },
        other => other.to_string(),
    }
}

fn truncate(body: &str) -> &str {
    match body.char_indices().nth(200) {
        Some((idx, _)) => &body[..idx],
        None => body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_body() {
        let err = validate_body("").unwrap_err();
        assert_eq!(err.code(), "api_response_empty");
    }

    #[test]
    fn test_zero_body_counts_as_empty() {
        let err = validate_body("0").unwrap_err();
        assert_eq!(err.code(), "api_response_empty");
    }

    #[test]
    fn test_whole_float_status_code() {
        let err = validate_body(r#"{"rajaongkir":{"status":{"code":200.0,"description":"OK"}}}"#)
            .unwrap_err();
        assert_eq!(err.code(), "api_response_error_200");

        let err = validate_body(r#"{"rajaongkir":{"status":{"code":400.5,"description":"X"}}}"#)
            .unwrap_err();
        assert_eq!(err.code(), "api_response_error_400.5");
    }

    #[test]
    fn test_invalid_json() {
        let err = validate_body("not json").unwrap_err();
        assert_eq!(err.code(), "api_response_invalid");
    }

    #[test]
    fn test_falsy_json_is_invalid() {
        for body in ["null", "false", "0.0", "[]", "\"\""] {
            let err = validate_body(body).unwrap_err();
            assert_eq!(err.code(), "api_response_invalid", "body: {}", body);
        }
    }

    #[test]
    fn test_error_status() {
        let err = validate_body(r#"{"rajaongkir":{"status":{"code":400,"description":"X"}}}"#)
            .unwrap_err();
        assert_eq!(err.code(), "api_response_error_400");
        assert_eq!(err.message(), "X");
    }

    #[test]
    fn test_error_status_wins_over_results() {
        let err = validate_body(
            r#"{"rajaongkir":{"status":{"code":401,"description":"Invalid key"},"results":[]}}"#,
        )
        .unwrap_err();
        assert_eq!(err.code(), "api_response_error_401");
    }

    #[test]
    fn test_string_status_code_is_not_success() {
        let err = validate_body(r#"{"rajaongkir":{"status":{"code":"200","description":"OK"}}}"#)
            .unwrap_err();
        assert_eq!(err.code(), "api_response_error_200");
    }

    #[test]
    fn test_results() {
        let value = validate_body(r#"{"rajaongkir":{"results":[1,2]}}"#).unwrap();
        assert_eq!(value, json!([1, 2]));
    }

    #[test]
    fn test_result() {
        let value = validate_body(r#"{"rajaongkir":{"result":{"a":1}}}"#).unwrap();
        assert_eq!(value, json!({"a": 1}));
    }

    #[test]
    fn test_results_preferred_over_result() {
        let value = validate_body(
            r#"{"rajaongkir":{"status":{"code":200,"description":"OK"},"results":[3],"result":{"a":1}}}"#,
        )
        .unwrap();
        assert_eq!(value, json!([3]));
    }

    #[test]
    fn test_unknown_shape() {
        let err = validate_body(r#"{"rajaongkir":{}}"#).unwrap_err();
        assert_eq!(err.code(), "unknown_error");

        let err = validate_body(r#"{"rajaongkir":{"status":{"code":200},"results":null}}"#)
            .unwrap_err();
        assert_eq!(err.code(), "unknown_error");
    }

    #[test]
    fn test_missing_envelope() {
        let err = validate_body(r#"{"other":true}"#).unwrap_err();
        assert_eq!(err.code(), "unknown_error");
    }

    #[test]
    fn test_prior_error_passes_through() {
        let err = validate_response(Err(WoongkirError::Config("boom".to_string()))).unwrap_err();
        assert_eq!(err.code(), "invalid_config");
    }
}
