use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::warn;

use crate::domain::ConnectorError;

/// Error envelope shared by OpenAI, Google, Anthropic and DeepSeek:
/// `{"error": {"message": "..."}}`.
#[derive(Deserialize)]
struct ErrorEnvelope {
    error: Option<ErrorBody>,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Pull the provider's own error message out of a response body, if any.
pub(crate) fn upstream_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorEnvelope>(body)
        .ok()
        .and_then(|env| env.error)
        .and_then(|err| err.message)
        .filter(|msg| !msg.trim().is_empty())
}

/// Logs a send failure without its URL, which may carry a query-string key.
fn transport_failure(err: reqwest::Error, context: &str, fallback: &str) -> ConnectorError {
    let timed_out = err.is_timeout();
    warn!(
        "{context}: request failed (timeout: {timed_out}): {}",
        err.without_url()
    );
    ConnectorError::transport(fallback)
}

/// Dispatch `request` and decode a 2xx body as `T`.
///
/// Non-2xx answers become [`ConnectorError::UpstreamRejected`] carrying the
/// upstream status and message (or `fallback` when the body has none).
/// Transport failures and undecodable bodies map to 500-class errors with the
/// `fallback` message.
pub(crate) async fn send_json<T: DeserializeOwned>(
    request: reqwest::RequestBuilder,
    context: &str,
    fallback: &str,
) -> Result<T, ConnectorError> {
    let response = request
        .send()
        .await
        .map_err(|e| transport_failure(e, context, fallback))?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        warn!("{context}: API returned {status}: {body}");
        let message = upstream_message(&body).unwrap_or_else(|| fallback.to_string());
        return Err(ConnectorError::upstream(status.as_u16(), message));
    }

    response.json::<T>().await.map_err(|e| {
        warn!("{context}: failed to parse response: {e}");
        ConnectorError::unexpected_response(fallback)
    })
}

/// Like [`send_json`] but discards the body; used by metadata probes.
pub(crate) async fn send_probe(
    request: reqwest::RequestBuilder,
    context: &str,
    fallback: &str,
) -> Result<(), ConnectorError> {
    let response = request
        .send()
        .await
        .map_err(|e| transport_failure(e, context, fallback))?;

    let status = response.status();
    if status.is_success() {
        return Ok(());
    }

    let body = response.text().await.unwrap_or_default();
    warn!("{context}: API returned {status}: {body}");
    let message = upstream_message(&body).unwrap_or_else(|| fallback.to_string());
    Err(ConnectorError::upstream(status.as_u16(), message))
}

/// Error for a 2xx body missing the field a reply is extracted from.
pub(crate) fn missing_field(context: &str, fallback: &str, field: &str) -> ConnectorError {
    warn!("{context}: response missing {field}");
    ConnectorError::unexpected_response(format!("{fallback}: response missing {field}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_openai_style_message() {
        let body = r#"{"error":{"message":"Incorrect API key provided",
            "type":"invalid_request_error"}}"#;
        assert_eq!(
            upstream_message(body).as_deref(),
            Some("Incorrect API key provided")
        );
    }

    #[test]
    fn extracts_anthropic_style_message() {
        let body = r#"{"type":"error",
            "error":{"type":"authentication_error","message":"invalid x-api-key"}}"#;
        assert_eq!(upstream_message(body).as_deref(), Some("invalid x-api-key"));
    }

    #[test]
    fn ignores_bodies_without_message() {
        assert!(upstream_message("<html>502</html>").is_none());
        assert!(upstream_message(r#"{"error":{}}"#).is_none());
        assert!(upstream_message(r#"{"error":{"message":"  "}}"#).is_none());
    }
}
