//! Generic HTTP client tools
//!
//! Shared request/response handling for HTTP backends: send, log, read body, decode JSON.
//! Backends build their own `RequestBuilder` (URL, headers, body) and hand it over here.
//!
//! Non-2xx statuses are returned to the caller rather than turned into errors, since a
//! backend that answers at all is considered reachable.

use std::time::Duration;

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::error::{BackendError, Result};
use crate::types::BackendOptions;
use crate::utils::log_sanitizer::truncate_for_log;

/// 默认连接超时（秒）
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// 创建 HTTP Client
///
/// 连接阶段固定 10 秒超时；整体请求超时由 `options.request_timeout` 决定，未设置则不限时。
pub fn create_http_client(options: &BackendOptions, backend_name: &str) -> Result<Client> {
    let mut builder =
        Client::builder().connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS));

    if let Some(timeout) = options.request_timeout {
        builder = builder.timeout(timeout);
    }

    builder.build().map_err(|e| BackendError::NetworkError {
        backend: backend_name.to_string(),
        detail: format!("Failed to create HTTP client: {e}"),
    })
}

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Performs an HTTP request and returns the status code and response text
    ///
    /// # Arguments
    /// * `request_builder` - configured request (URL, headers, body)
    /// * `backend_name` - backend name (for logging)
    /// * `method_name` - request method name, used for logs
    /// * `url` - request URL, used for logs
    ///
    /// # Returns
    /// * `Ok((status_code, response_text))` for any HTTP status
    /// * `Err(BackendError::Timeout)` / `Err(BackendError::NetworkError)` when no response arrived
    pub async fn execute_request(
        request_builder: RequestBuilder,
        backend_name: &str,
        method_name: &str,
        url: &str,
    ) -> Result<(u16, String)> {
        log::debug!("[{backend_name}] {method_name} {url}");

        let response = request_builder
            .send()
            .await
            .map_err(|e| classify_send_error(&e, backend_name))?;

        let status_code = response.status().as_u16();
        log::debug!("[{backend_name}] Response Status: {status_code}");

        let response_text = response.text().await.map_err(|e| {
            if e.is_timeout() {
                BackendError::Timeout {
                    backend: backend_name.to_string(),
                    detail: format!("Timed out reading response body: {e}"),
                }
            } else {
                BackendError::NetworkError {
                    backend: backend_name.to_string(),
                    detail: format!("Failed to read response body: {e}"),
                }
            }
        })?;

        log::debug!(
            "[{backend_name}] Response Body: {}",
            truncate_for_log(&response_text)
        );

        Ok((status_code, response_text))
    }

    /// Parse JSON response
    ///
    /// # Returns
    /// * `Ok(T)` - successfully parsed
    /// * `Err(BackendError::ParseError)` - parsing failed
    pub fn parse_json<T>(response_text: &str, backend_name: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("[{backend_name}] JSON parse failed: {e}");
            log::error!(
                "[{backend_name}] Raw response: {}",
                truncate_for_log(response_text)
            );
            BackendError::ParseError {
                backend: backend_name.to_string(),
                detail: e.to_string(),
            }
        })
    }
}

/// 将 reqwest 发送错误映射为统一错误类型
fn classify_send_error(error: &reqwest::Error, backend_name: &str) -> BackendError {
    if error.is_timeout() {
        BackendError::Timeout {
            backend: backend_name.to_string(),
            detail: error.to_string(),
        }
    } else {
        BackendError::NetworkError {
            backend: backend_name.to_string(),
            detail: error.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_json_valid() {
        #[derive(serde::Deserialize, Debug, PartialEq)]
        struct Reply {
            english: String,
        }
        let result: Result<Reply> = HttpUtils::parse_json(r#"{"english":"hello"}"#, "test");
        assert!(
            matches!(&result, Ok(Reply { english }) if english == "hello"),
            "unexpected parse result: {result:?}"
        );
    }

    #[test]
    fn parse_json_invalid() {
        let result: Result<serde_json::Value> =
            HttpUtils::parse_json("<html>502 Bad Gateway</html>", "test");
        assert!(
            matches!(&result, Err(BackendError::ParseError { backend, .. }) if backend == "test"),
            "unexpected parse result: {result:?}"
        );
    }

    #[test]
    fn parse_json_empty_body() {
        let result: Result<serde_json::Value> = HttpUtils::parse_json("", "test");
        assert!(matches!(result, Err(BackendError::ParseError { .. })));
    }

    #[test]
    fn client_builds_with_and_without_timeout() {
        assert!(create_http_client(&BackendOptions::default(), "test").is_ok());
        assert!(create_http_client(&BackendOptions::from_timeout_secs(Some(5)), "test").is_ok());
    }
}
