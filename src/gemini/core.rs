//! Client for the Gemini `generateContent` completion endpoint.
//!
//! Transport failures are retried with exponential backoff. An
//! unsuccessful HTTP status is not retried; it ends the attempts
//! immediately. Both exhaustion and a bad status collapse into
//! `GenerateError::RequestFailed` so callers only deal with a two-tier
//! taxonomy.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Substituted when a success body doesn't have the expected shape.
pub const FALLBACK_REPLY: &str = "Sorry, I couldn't process that.";

const MAX_ATTEMPTS: u32 = 3;

#[derive(Debug, Error)]
pub enum GenerateError {
    /// The network call itself could not be completed.
    #[error("Transport error calling the completion endpoint: {0}")]
    Transport(#[from] reqwest::Error),
    /// No usable response was obtained: transport retries were
    /// exhausted or the HTTP status was unsuccessful.
    #[error("Completion request failed")]
    RequestFailed,
}

#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct Part {
    pub text: String,
}

#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct Content {
    pub role: String,
    pub parts: Vec<Part>,
}

#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct GenerateRequest {
    pub contents: Vec<Content>,
}

impl GenerateRequest {
    /// The whole constructed prompt travels as a single user part.
    pub fn from_prompt(prompt: &str) -> Self {
        Self {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        }
    }
}

fn endpoint_url(api_hostname: &str, model: &str, api_key: &str) -> String {
    format!(
        "{}/v1beta/models/{}:generateContent?key={}",
        api_hostname.trim_end_matches('/'),
        model,
        api_key
    )
}

/// A single POST to the completion endpoint. Returns the response
/// whatever its status; only transport failures are errors.
pub async fn generate_once(
    prompt: &str,
    api_hostname: &str,
    api_key: &str,
    model: &str,
) -> Result<reqwest::Response, GenerateError> {
    let payload = GenerateRequest::from_prompt(prompt);
    let response = reqwest::Client::new()
        .post(endpoint_url(api_hostname, model, api_key))
        .header("Content-Type", "application/json")
        .json(&payload)
        .send()
        .await?;
    Ok(response)
}

/// Calls the completion endpoint with up to three attempts. A transport
/// error on a non-final attempt waits 2^attempt seconds (1s, 2s) before
/// retrying. The first response received ends the attempts regardless
/// of status; a non-success status resolves to `RequestFailed` without
/// consuming the remaining retry budget.
pub async fn generate(
    prompt: &str,
    api_hostname: &str,
    api_key: &str,
    model: &str,
) -> Result<Value, GenerateError> {
    let mut response = None;

    for attempt in 0..MAX_ATTEMPTS {
        match generate_once(prompt, api_hostname, api_key, model).await {
            Ok(resp) => {
                response = Some(resp);
                break;
            }
            Err(err) => {
                tracing::warn!("Attempt {} failed: {}", attempt + 1, err);
                if attempt < MAX_ATTEMPTS - 1 {
                    tokio::time::sleep(Duration::from_secs(2u64.pow(attempt))).await;
                }
            }
        }
    }

    let response = response.ok_or(GenerateError::RequestFailed)?;
    if !response.status().is_success() {
        tracing::warn!(
            "Completion endpoint returned status {}",
            response.status()
        );
        return Err(GenerateError::RequestFailed);
    }

    // A success body that isn't JSON is treated like any other shape
    // deviation downstream and maps to the fallback reply.
    let body = response.json::<Value>().await.unwrap_or(Value::Null);
    Ok(body)
}

/// Extracts the first candidate's first content part's text. Any
/// deviation from the expected shape yields the fallback reply rather
/// than an error.
pub fn extract_reply(body: &Value) -> String {
    body["candidates"][0]["content"]["parts"][0]["text"]
        .as_str()
        .unwrap_or(FALLBACK_REPLY)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::time::Instant;

    #[test]
    fn test_endpoint_url() {
        let url = endpoint_url("https://generativelanguage.googleapis.com", "gemini-2.5-flash-preview-05-20", "");
        assert_eq!(
            url,
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash-preview-05-20:generateContent?key="
        );
    }

    #[test]
    fn test_endpoint_url_trims_trailing_slash() {
        let url = endpoint_url("http://localhost:8080/", "test-model", "abc");
        assert_eq!(
            url,
            "http://localhost:8080/v1beta/models/test-model:generateContent?key=abc"
        );
    }

    #[test]
    fn test_generate_request_serialization() {
        let payload = GenerateRequest::from_prompt("Hello");
        assert_eq!(
            serde_json::to_string(&payload).unwrap(),
            r#"{"contents":[{"role":"user","parts":[{"text":"Hello"}]}]}"#
        );
    }

    #[test]
    fn test_extract_reply() {
        let body = json!({
            "candidates": [{
                "content": {
                    "parts": [{"text": "Hi there!"}]
                }
            }]
        });
        assert_eq!(extract_reply(&body), "Hi there!");
    }

    #[test]
    fn test_extract_reply_missing_path_falls_back() {
        assert_eq!(extract_reply(&json!({})), FALLBACK_REPLY);
        assert_eq!(extract_reply(&json!({"candidates": []})), FALLBACK_REPLY);
        assert_eq!(
            extract_reply(&json!({"candidates": [{"content": {"parts": []}}]})),
            FALLBACK_REPLY
        );
        assert_eq!(extract_reply(&Value::Null), FALLBACK_REPLY);
    }

    #[tokio::test]
    async fn test_generate_success() {
        let mut server = mockito::Server::new_async().await;

        let response_body = r#"{
            "candidates": [{
                "content": {
                    "parts": [{"text": "Hello from the model"}]
                }
            }]
        }"#;

        let mock = server
            .mock("POST", "/v1beta/models/test-model:generateContent?key=test-key")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(response_body)
            .create();

        let result = generate("Hi", server.url().as_str(), "test-key", "test-model").await;

        mock.assert();
        let body = result.unwrap();
        assert_eq!(extract_reply(&body), "Hello from the model");
    }

    #[tokio::test]
    async fn test_generate_server_error_does_not_retry() {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("POST", "/v1beta/models/test-model:generateContent?key=test-key")
            .with_status(500)
            .with_body("internal error")
            .expect(1)
            .create();

        let start = Instant::now();
        let result = generate("Hi", server.url().as_str(), "test-key", "test-model").await;

        // Exactly one request and no backoff wait
        mock.assert();
        assert!(start.elapsed() < Duration::from_secs(1));
        assert!(matches!(result, Err(GenerateError::RequestFailed)));
    }

    #[tokio::test]
    async fn test_generate_non_json_success_body_is_null() {
        let mut server = mockito::Server::new_async().await;

        let _mock = server
            .mock("POST", "/v1beta/models/test-model:generateContent?key=test-key")
            .with_status(200)
            .with_body("not json at all")
            .create();

        let body = generate("Hi", server.url().as_str(), "test-key", "test-model")
            .await
            .unwrap();
        assert_eq!(extract_reply(&body), FALLBACK_REPLY);
    }

    #[tokio::test]
    async fn test_generate_once_transport_error() {
        // Nothing is listening on this port
        let result = generate_once("Hi", "http://127.0.0.1:1", "test-key", "test-model").await;
        assert!(matches!(result, Err(GenerateError::Transport(_))));
    }
}
