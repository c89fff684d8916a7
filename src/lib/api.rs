//! JSON helpers over the browser's fetch primitive.
//!
//! Every call resolves its path against the configured API base, sends
//! and expects JSON, and attaches the bearer token whenever one is
//! stored. Failures normalize into [`AppError`] values whose messages
//! are safe to show; server-sent error text is preferred, clipped, over
//! raw status codes. There are no retries and no timeouts: a request
//! either settles or the browser reports a transport error.

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use super::config::AppConfig;
use super::errors::AppError;
use super::session;

/// Longest server-sent error message surfaced to the UI.
const MAX_ERROR_CHARS: usize = 200;

/// Fetches JSON and decodes it into `T`.
pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, AppError> {
    get_json_with_headers(path, &[]).await
}

/// Fetches JSON with caller headers layered over the defaults.
pub async fn get_json_with_headers<T: DeserializeOwned>(
    path: &str,
    headers: &[(String, String)],
) -> Result<T, AppError> {
    let url = resolve_url(path)?;
    let request = apply_headers(Request::get(&url), headers)
        .build()
        .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))?;

    let response = send(request).await?;
    decode(handle_json_response(response).await?)
}

/// Posts `body` as JSON and decodes the response into `T`.
pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, AppError> {
    decode(post_json_value(path, body, &[]).await?)
}

/// Posts `body` as JSON and ignores whatever the server sends back.
pub async fn post_json_discard<B: Serialize>(path: &str, body: &B) -> Result<(), AppError> {
    post_json_value(path, body, &[]).await?;
    Ok(())
}

/// Posts with an empty body, for endpoints that take no payload.
pub async fn post_empty(path: &str) -> Result<(), AppError> {
    let url = resolve_url(path)?;
    let request = apply_headers(Request::post(&url), &[])
        .body("")
        .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))?;

    let response = send(request).await?;
    handle_json_response(response).await?;
    Ok(())
}

async fn post_json_value<B: Serialize>(
    path: &str,
    body: &B,
    headers: &[(String, String)],
) -> Result<Value, AppError> {
    let payload = serde_json::to_string(body)
        .map_err(|err| AppError::Serialization(format!("Failed to encode request: {err}")))?;

    let url = resolve_url(path)?;
    let request = apply_headers(Request::post(&url), headers)
        .body(payload)
        .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))?;

    let response = send(request).await?;
    handle_json_response(response).await
}

/// Default headers first, then caller headers so they win on conflict.
fn apply_headers(builder: RequestBuilder, extra: &[(String, String)]) -> RequestBuilder {
    let mut builder = builder.header("Content-Type", "application/json");
    if let Some(token) = session::stored_token() {
        builder = builder.header("Authorization", &auth_header_value(&token));
    }
    for (name, value) in extra {
        builder = builder.header(name, value);
    }
    builder
}

fn auth_header_value(token: &str) -> String {
    format!("Bearer {token}")
}

async fn send(request: Request) -> Result<Response, AppError> {
    request.send().await.map_err(map_request_error)
}

/// Transport failures never carry response text, so the message is ours.
fn map_request_error(err: gloo_net::Error) -> AppError {
    AppError::Network(format!("Unable to reach the server: {err}"))
}

/// Success bodies parse into a JSON value, with an empty body standing in
/// for `{}` so 204-style responses flow through the same path. Error
/// statuses become [`AppError::Http`] with the best message available.
async fn handle_json_response(response: Response) -> Result<Value, AppError> {
    if response.ok() {
        let text = response
            .text()
            .await
            .map_err(|err| AppError::Parse(format!("Failed to read response: {err}")))?;
        return parse_success_body(&text);
    }

    let status = response.status();
    let status_text = response.status_text();
    let body = response.text().await.unwrap_or_default();
    Err(AppError::Http {
        status,
        message: error_message(status, &status_text, &body),
    })
}

fn parse_success_body(text: &str) -> Result<Value, AppError> {
    if text.is_empty() {
        return Ok(Value::Object(Map::new()));
    }
    serde_json::from_str(text)
        .map_err(|err| AppError::Parse(format!("Failed to decode response: {err}")))
}

/// Picks the error text for a failed response: the body's `message` or
/// `detail` field when the body is JSON, the status line otherwise, and
/// `HTTP <status>` when neither says anything.
fn error_message(status: u16, status_text: &str, body: &str) -> String {
    match serde_json::from_str::<Value>(body) {
        Ok(data) => extract_field(&data, "message")
            .or_else(|| extract_field(&data, "detail"))
            .unwrap_or_else(|| {
                let text = status_text.trim();
                if text.is_empty() {
                    format!("HTTP {status}")
                } else {
                    text.to_string()
                }
            }),
        Err(_) => format!("HTTP {status}"),
    }
}

fn extract_field(data: &Value, key: &str) -> Option<String> {
    data.get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(|text| text.chars().take(MAX_ERROR_CHARS).collect())
}

fn decode<T: DeserializeOwned>(value: Value) -> Result<T, AppError> {
    serde_json::from_value(value)
        .map_err(|err| AppError::Parse(format!("Failed to decode response: {err}")))
}

fn resolve_url(path: &str) -> Result<String, AppError> {
    resolve_with_base(&AppConfig::load().api_base_url, path)
}

/// Absolute URLs pass through untouched; anything else joins the
/// configured base, which must be non-blank. `FLEGI_API_BASE_URL` set to
/// an empty string at build time is the one way to end up here blank.
fn resolve_with_base(base_url: &str, path: &str) -> Result<String, AppError> {
    if path.starts_with("http") {
        return Ok(path.to_string());
    }
    if base_url.trim().is_empty() {
        return Err(AppError::Config("API base URL is not configured.".to_string()));
    }
    Ok(join_base(base_url, path))
}

/// Joins the API base and a path without doubling or dropping slashes.
fn join_base(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();
    if path.is_empty() {
        base.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_base_handles_slashes() {
        assert_eq!(
            join_base("http://127.0.0.1:8000", "/api/reminders"),
            "http://127.0.0.1:8000/api/reminders"
        );
        assert_eq!(
            join_base("http://127.0.0.1:8000/", "api/reminders"),
            "http://127.0.0.1:8000/api/reminders"
        );
        assert_eq!(
            join_base(" http://127.0.0.1:8000/ ", " /api/reminders "),
            "http://127.0.0.1:8000/api/reminders"
        );
        assert_eq!(join_base("http://127.0.0.1:8000", ""), "http://127.0.0.1:8000");
    }

    #[test]
    fn absolute_urls_pass_through_untouched() {
        assert_eq!(
            resolve_with_base("http://127.0.0.1:8000", "https://api.flegi.example/api/logs")
                .unwrap(),
            "https://api.flegi.example/api/logs"
        );
    }

    #[test]
    fn relative_paths_join_the_configured_base() {
        assert_eq!(
            resolve_with_base("http://127.0.0.1:8000", "/api/logs").unwrap(),
            "http://127.0.0.1:8000/api/logs"
        );
    }

    #[test]
    fn blank_base_url_is_a_config_error() {
        assert!(matches!(
            resolve_with_base("", "/api/logs"),
            Err(AppError::Config(_))
        ));
        assert!(matches!(
            resolve_with_base("   ", "/api/logs"),
            Err(AppError::Config(_))
        ));
    }

    #[test]
    fn auth_header_uses_bearer_scheme() {
        assert_eq!(auth_header_value("tok"), "Bearer tok");
    }

    #[test]
    fn empty_success_body_reads_as_empty_object() {
        assert_eq!(
            parse_success_body("").unwrap(),
            Value::Object(Map::new())
        );
    }

    #[test]
    fn malformed_success_body_is_a_parse_error() {
        assert!(matches!(
            parse_success_body("not json"),
            Err(AppError::Parse(_))
        ));
    }

    #[test]
    fn error_message_prefers_message_field() {
        assert_eq!(
            error_message(400, "Bad Request", r#"{"message":"Invalid credentials","detail":"nope"}"#),
            "Invalid credentials"
        );
    }

    #[test]
    fn error_message_falls_back_to_detail_field() {
        assert_eq!(
            error_message(422, "Unprocessable Entity", r#"{"detail":"email already registered"}"#),
            "email already registered"
        );
    }

    #[test]
    fn error_message_skips_blank_fields() {
        assert_eq!(
            error_message(400, "Bad Request", r#"{"message":"  ","detail":"broken"}"#),
            "broken"
        );
    }

    #[test]
    fn error_message_falls_back_to_status_line() {
        assert_eq!(
            error_message(503, "Service Unavailable", r#"{"error":"unused"}"#),
            "Service Unavailable"
        );
    }

    #[test]
    fn error_message_without_any_text_names_the_status() {
        assert_eq!(error_message(500, "", r#"{}"#), "HTTP 500");
        assert_eq!(error_message(502, "Bad Gateway", "<html>oops</html>"), "HTTP 502");
        assert_eq!(error_message(500, "", ""), "HTTP 500");
    }

    #[test]
    fn error_message_clips_long_server_text() {
        let body = format!(r#"{{"message":"{}"}}"#, "x".repeat(500));
        assert_eq!(error_message(400, "Bad Request", &body).len(), MAX_ERROR_CHARS);
    }

    #[test]
    fn decode_mismatch_is_a_parse_error() {
        let value = serde_json::json!({"unexpected": true});
        let result: Result<Vec<String>, AppError> = decode(value);
        assert!(matches!(result, Err(AppError::Parse(_))));
    }
}
