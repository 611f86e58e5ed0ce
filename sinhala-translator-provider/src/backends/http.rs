//! HTTP/JSON translation backend

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{ACCEPT, CONTENT_TYPE};

use crate::error::{BackendError, Result};
use crate::http_client::{HttpUtils, create_http_client};
use crate::traits::TranslationBackend;
use crate::types::{BackendOptions, BackendTarget, TranslationReply, TranslationRequest};

const BACKEND_ID: &str = "http";

/// `POST <base-url><endpoint>` with `{"text": ...}`, reply read from a JSON object.
///
/// One client is shared by every target, so sections pointing at the same host
/// reuse connections.
pub struct HttpTranslationBackend {
    client: Client,
}

impl HttpTranslationBackend {
    pub fn new(options: &BackendOptions) -> Result<Self> {
        Ok(Self {
            client: create_http_client(options, BACKEND_ID)?,
        })
    }
}

#[async_trait]
impl TranslationBackend for HttpTranslationBackend {
    fn id(&self) -> &'static str {
        BACKEND_ID
    }

    async fn translate(&self, target: &BackendTarget, text: &str) -> Result<TranslationReply> {
        let url = target.url()?;

        let body = serde_json::to_string(&TranslationRequest { text }).map_err(|e| {
            BackendError::SerializationError {
                backend: BACKEND_ID.to_string(),
                detail: e.to_string(),
            }
        })?;

        let request = self
            .client
            .post(url.clone())
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .body(body);

        let (status, response_text) =
            HttpUtils::execute_request(request, BACKEND_ID, "POST", url.as_str()).await?;

        let value: serde_json::Value = HttpUtils::parse_json(&response_text, BACKEND_ID)?;
        let reply =
            TranslationReply::from_value(&value, target.response_field.as_deref(), BACKEND_ID)?;

        if !(200..300).contains(&status) {
            log::warn!(
                "[{BACKEND_ID}] {url} answered HTTP {status}: {}",
                reply.server_error.as_deref().unwrap_or("no error message")
            );
        } else if let Some(ref server_error) = reply.server_error {
            log::warn!("[{BACKEND_ID}] {url} reported an error: {server_error}");
        }

        Ok(reply)
    }
}
