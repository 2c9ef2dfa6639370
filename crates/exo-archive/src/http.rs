//! Shared HTTP response helpers for the archive and image clients.
//!
//! Centralizes status-code checks (429 rate limiting with `Retry-After`
//! parsing, non-success → [`FetchError::Api`]) and body reading so the
//! endpoint modules stay focused on request construction and mapping.

use crate::error::FetchError;

/// Longest error body kept in [`FetchError::Api`] messages.
const MAX_ERROR_BODY: usize = 512;

/// Check an HTTP response for common error conditions.
///
/// Returns the response unchanged on success. Handles:
/// - **429 Too Many Requests** → [`FetchError::RateLimited`] with
///   `Retry-After` header parsing (falls back to 60 s if absent or
///   unparseable).
/// - **Non-success status** → [`FetchError::Api`] with status code and a
///   truncated response body.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, FetchError> {
    if resp.status() == 429 {
        let retry_after = parse_retry_after(&resp);
        return Err(FetchError::RateLimited {
            retry_after_secs: retry_after,
        });
    }
    if !resp.status().is_success() {
        let status = resp.status().as_u16();
        let mut message = resp.text().await.unwrap_or_default();
        truncate_on_char_boundary(&mut message, MAX_ERROR_BODY);
        return Err(FetchError::Api { status, message });
    }
    Ok(resp)
}

/// Read a successful response body as text.
///
/// # Errors
///
/// Returns [`FetchError::Http`] if the body cannot be read and
/// [`FetchError::Empty`] if it is blank.
pub async fn read_body(resp: reqwest::Response) -> Result<String, FetchError> {
    let body = resp.text().await?;
    if body.trim().is_empty() {
        return Err(FetchError::Empty);
    }
    Ok(body)
}

/// Parse the `Retry-After` header as seconds, falling back to 60 s.
fn parse_retry_after(resp: &reqwest::Response) -> u64 {
    resp.headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(60)
}

fn truncate_on_char_boundary(text: &mut String, max: usize) {
    if text.len() <= max {
        return;
    }
    let mut cut = max;
    while !text.is_char_boundary(cut) {
        cut -= 1;
    }
    text.truncate(cut);
}
