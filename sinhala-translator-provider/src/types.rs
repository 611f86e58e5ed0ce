use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use url::Url;

use crate::error::{BackendError, Result};

/// Response fields tried, in order, when a target does not name its own field.
///
/// `english` is what the Sinhala model server answers with; `result` is used by
/// the generic NLP endpoints.
pub const DEFAULT_TRANSLATION_FIELDS: &[&str] = &["english", "result", "translation"];

/// Field a backend uses to report its own failure (`{"error": "..."}`).
const SERVER_ERROR_FIELD: &str = "error";

// ============ Target ============

/// Where a translation request is sent and how its reply is read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackendTarget {
    /// Backend origin, e.g. `https://example.up.railway.app`.
    pub base_url: String,
    /// Path appended to `base_url`, e.g. `/translate`.
    pub endpoint: String,
    /// Name of the translation field in the JSON reply.
    ///
    /// `None` tries [`DEFAULT_TRANSLATION_FIELDS`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_field: Option<String>,
}

impl BackendTarget {
    pub fn new(base_url: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            endpoint: endpoint.into(),
            response_field: None,
        }
    }

    #[must_use]
    pub fn with_response_field(mut self, field: impl Into<String>) -> Self {
        self.response_field = Some(field.into());
        self
    }

    /// Join `base_url` and `endpoint` into the request URL.
    ///
    /// A trailing `/` on the base and a missing leading `/` on the endpoint are
    /// tolerated. Only `http` and `https` are accepted.
    pub fn url(&self) -> Result<Url> {
        let base = self.base_url.trim().trim_end_matches('/');
        let endpoint = self.endpoint.trim();
        let raw = if endpoint.starts_with('/') || endpoint.is_empty() {
            format!("{base}{endpoint}")
        } else {
            format!("{base}/{endpoint}")
        };

        let url = Url::parse(&raw).map_err(|e| BackendError::InvalidUrl {
            url: raw.clone(),
            detail: e.to_string(),
        })?;

        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(BackendError::InvalidUrl {
                url: raw,
                detail: format!("unsupported scheme '{other}'"),
            }),
        }
    }
}

// ============ Request / Reply ============

/// JSON body sent to every endpoint: `{"text": "..."}`.
#[derive(Debug, Serialize)]
pub struct TranslationRequest<'a> {
    pub text: &'a str,
}

/// What a reachable backend answered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationReply {
    /// First non-empty string found under the translation field.
    pub translation: Option<String>,
    /// The backend's own `error` message, if it sent one.
    pub server_error: Option<String>,
}

impl TranslationReply {
    pub fn translated(text: impl Into<String>) -> Self {
        Self {
            translation: Some(text.into()),
            server_error: None,
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Read a reply out of a decoded JSON body.
    ///
    /// Objects are searched for `field` (or the default field list). Any other
    /// non-null shape is a reply without a translation. `null` is rejected like
    /// an unreadable body.
    pub fn from_value(value: &Value, field: Option<&str>, backend: &str) -> Result<Self> {
        let object = match value {
            Value::Object(map) => map,
            Value::Null => {
                return Err(BackendError::ParseError {
                    backend: backend.to_string(),
                    detail: "response body is JSON null".to_string(),
                });
            }
            _ => return Ok(Self::empty()),
        };

        let shown = |key: &str| object.get(key).and_then(displayable);

        let translation = match field {
            Some(name) => shown(name),
            None => DEFAULT_TRANSLATION_FIELDS
                .iter()
                .copied()
                .find_map(|name| shown(name)),
        };

        let server_error = object
            .get(SERVER_ERROR_FIELD)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .map(str::to_string);

        Ok(Self {
            translation,
            server_error,
        })
    }
}

/// 字段值的显示文本：空串、`0`、`false`、`null` 以及数组和对象都视为没有译文
fn displayable(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) if n.as_f64().is_some_and(|f| f.abs() > 0.0) => Some(n.to_string()),
        Value::Bool(true) => Some("true".to_string()),
        _ => None,
    }
}

// ============ Options ============

/// 后端构建参数
#[derive(Debug, Clone, Default)]
pub struct BackendOptions {
    /// 整体请求超时；`None` 表示不限时
    pub request_timeout: Option<Duration>,
}

impl BackendOptions {
    pub fn from_timeout_secs(secs: Option<u64>) -> Self {
        Self {
            request_timeout: secs.map(Duration::from_secs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn url_joins_base_and_endpoint() {
        let target =
            BackendTarget::new("https://web-production-ae6fc.up.railway.app", "/translate");
        assert_eq!(
            target.url().unwrap().as_str(),
            "https://web-production-ae6fc.up.railway.app/translate"
        );
    }

    #[test]
    fn url_tolerates_slashes() {
        let target = BackendTarget::new("http://localhost:8080/", "api/nlp/first");
        assert_eq!(
            target.url().unwrap().as_str(),
            "http://localhost:8080/api/nlp/first"
        );
    }

    #[test]
    fn url_rejects_non_http_scheme() {
        let target = BackendTarget::new("ftp://localhost", "/translate");
        assert!(matches!(target.url(), Err(BackendError::InvalidUrl { .. })));
    }

    #[test]
    fn url_rejects_relative_base() {
        let target = BackendTarget::new("", "/translate");
        assert!(matches!(target.url(), Err(BackendError::InvalidUrl { .. })));
    }

    #[test]
    fn reply_reads_default_field() {
        let body = json!({"english": "bonjour"});
        let reply = TranslationReply::from_value(&body, None, "t").unwrap();
        assert_eq!(reply.translation.as_deref(), Some("bonjour"));
    }

    #[test]
    fn reply_prefers_configured_field() {
        let body = json!({"english": "hello", "result": "first"});
        let reply = TranslationReply::from_value(&body, Some("result"), "t").unwrap();
        assert_eq!(reply.translation.as_deref(), Some("first"));
    }

    #[test]
    fn reply_without_field_is_empty() {
        let reply = TranslationReply::from_value(&json!({}), None, "t").unwrap();
        assert_eq!(reply, TranslationReply::empty());
    }

    #[test]
    fn reply_skips_empty_and_falsy_values() {
        let body = json!({"english": "", "result": 0, "translation": false});
        let reply = TranslationReply::from_value(&body, None, "t").unwrap();
        assert!(reply.translation.is_none());

        let body = json!({"english": null, "result": {"text": "x"}});
        let reply = TranslationReply::from_value(&body, None, "t").unwrap();
        assert!(reply.translation.is_none());
    }

    #[test]
    fn reply_renders_number_and_bool_values() {
        let reply = TranslationReply::from_value(&json!({"english": 42}), None, "t").unwrap();
        assert_eq!(reply.translation.as_deref(), Some("42"));

        let body = json!({"english": "", "result": 2.5});
        let reply = TranslationReply::from_value(&body, None, "t").unwrap();
        assert_eq!(reply.translation.as_deref(), Some("2.5"));

        let reply = TranslationReply::from_value(&json!({"answer": true}), Some("answer"), "t")
            .unwrap();
        assert_eq!(reply.translation.as_deref(), Some("true"));
    }

    #[test]
    fn reply_captures_server_error() {
        let body = json!({"error": "Missing or empty \"text\" parameter"});
        let reply = TranslationReply::from_value(&body, None, "t").unwrap();
        assert!(reply.translation.is_none());
        assert_eq!(
            reply.server_error.as_deref(),
            Some("Missing or empty \"text\" parameter")
        );
    }

    #[test]
    fn reply_array_body_is_empty() {
        let reply = TranslationReply::from_value(&json!(["bonjour"]), None, "t").unwrap();
        assert!(reply.translation.is_none());
    }

    #[test]
    fn reply_null_body_is_parse_error() {
        let result = TranslationReply::from_value(&Value::Null, None, "t");
        assert!(matches!(result, Err(BackendError::ParseError { .. })));
    }

    #[test]
    fn request_serializes_text_only() {
        let body = serde_json::to_string(&TranslationRequest { text: "ආයුබෝවන්" }).unwrap();
        assert_eq!(body, r#"{"text":"ආයුබෝවන්"}"#);
    }
}
