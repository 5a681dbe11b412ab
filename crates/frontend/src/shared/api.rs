//! HTTP helpers over `gloo-net` with abort signals and a bounded retry

use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::future::Future;
use web_sys::AbortSignal;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Cancelled by the caller, not a failure
    #[error("request aborted")]
    Aborted,
    #[error("Failed to send request: {0}")]
    Network(String),
    #[error("HTTP error: {0}")]
    Http(u16),
    #[error("Failed to parse response: {0}")]
    Parse(String),
    #[error("Failed to encode request: {0}")]
    Encode(String),
}

impl ApiError {
    pub fn is_aborted(&self) -> bool {
        matches!(self, ApiError::Aborted)
    }

    /// Transport failures and 5xx are worth another attempt
    pub fn is_retryable(&self) -> bool {
        matches!(self, ApiError::Network(_) | ApiError::Http(500..=599))
    }
}

fn is_aborted(signal: Option<&AbortSignal>) -> bool {
    signal.map(|s| s.aborted()).unwrap_or(false)
}

fn send_error(e: gloo_net::Error, signal: Option<&AbortSignal>) -> ApiError {
    if is_aborted(signal) {
        ApiError::Aborted
    } else {
        ApiError::Network(e.to_string())
    }
}

async fn read_json<T: DeserializeOwned>(
    response: gloo_net::http::Response,
    signal: Option<&AbortSignal>,
) -> Result<T, ApiError> {
    if !response.ok() {
        return Err(ApiError::Http(response.status()));
    }
    response.json::<T>().await.map_err(|e| {
        if is_aborted(signal) {
            ApiError::Aborted
        } else {
            ApiError::Parse(e.to_string())
        }
    })
}

pub async fn get_json<T: DeserializeOwned>(
    url: &str,
    signal: Option<&AbortSignal>,
) -> Result<T, ApiError> {
    let response = Request::get(url)
        .abort_signal(signal)
        .send()
        .await
        .map_err(|e| send_error(e, signal))?;
    read_json(response, signal).await
}

pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    url: &str,
    body: &B,
    signal: Option<&AbortSignal>,
) -> Result<T, ApiError> {
    let response = Request::post(url)
        .abort_signal(signal)
        .json(body)
        .map_err(|e| ApiError::Encode(e.to_string()))?
        .send()
        .await
        .map_err(|e| send_error(e, signal))?;
    read_json(response, signal).await
}

pub fn should_retry(error: &ApiError, attempts_done: u32, max_retries: u32) -> bool {
    error.is_retryable() && attempts_done < max_retries
}

/// Run `attempt` once plus up to `max_retries` more times on retryable errors
pub async fn with_retry<T, F, Fut>(max_retries: u32, mut attempt: F) -> Result<T, ApiError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, ApiError>>,
{
    let mut retries = 0;
    loop {
        match attempt().await {
            Err(e) if should_retry(&e, retries, max_retries) => {
                retries += 1;
                log::warn!("Retrying request ({}/{}): {}", retries, max_retries, e);
            }
            other => return other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retry_policy() {
        assert!(should_retry(&ApiError::Http(503), 0, 1));
        assert!(!should_retry(&ApiError::Http(503), 1, 1));
        assert!(!should_retry(&ApiError::Http(404), 0, 1));
        assert!(!should_retry(&ApiError::Aborted, 0, 1));
        assert!(should_retry(&ApiError::Network("offline".into()), 0, 1));
        assert!(!should_retry(&ApiError::Parse("eof".into()), 0, 3));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(ApiError::Http(500).to_string(), "HTTP error: 500");
        assert!(ApiError::Aborted.is_aborted());
    }
}
