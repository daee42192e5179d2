use crate::domain::{BoxError, Translator};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::fmt;

// Thin wrapper around reqwest for the Shakespeare translation service.
#[derive(Clone)]
pub struct TranslationClient {
    http: Client,
    base_url: String,
}

#[derive(Debug, Serialize)]
struct TranslateRequest<'a> {
    text: &'a str,
}

// Missing fields decode to empty strings; an error reply in a JSON body is still trusted.
#[derive(Debug, Default, Deserialize)]
struct TranslateResponse {
    #[serde(default)]
    contents: TranslatedContents,
}

#[derive(Debug, Default, Deserialize)]
struct TranslatedContents {
    #[serde(default)]
    translated: String,
}

#[derive(Debug)]
pub enum TranslationClientError {
    Transport(reqwest::Error),
    Decode(reqwest::Error),
}

impl fmt::Display for TranslationClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TranslationClientError::Transport(err) => {
                write!(f, "translation transport error: {err}")
            }
            TranslationClientError::Decode(err) => {
                write!(f, "translation response decode error: {err}")
            }
        }
    }
}

impl std::error::Error for TranslationClientError {}

impl TranslationClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl Translator for TranslationClient {
    async fn translate(&self, text: &str) -> Result<String, BoxError> {
        let res = self
            .http
            .post(&self.base_url)
            .json(&TranslateRequest { text })
            .send()
            .await
            .map_err(TranslationClientError::Transport)?;

        // The status is not inspected: any JSON body is trusted.
        tracing::debug!(status = %res.status(), "translation response received.");
        let body = res
            .json::<TranslateResponse>()
            .await
            .map_err(TranslationClientError::Decode)?;

        Ok(body.contents.translated)
    }
}
