//! Remote recognizer backend.
//!
//! Talks to an NER sidecar over HTTP: `POST {base}/recognize` with
//! `{"text": ...}`, expecting `{"entities": [{"text", "label"}]}`. The
//! sidecar owns model loading; this client is stateless.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{EntityRecognizer, EntitySpan, RecognizerError};

const REQUEST_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, Serialize)]
struct RecognizeRequest<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct RecognizeResponse {
    entities: Vec<EntitySpan>,
}

#[derive(Clone)]
pub struct HttpRecognizer {
    client: Client,
    base_url: String,
}

impl HttpRecognizer {
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()
                .expect("Failed to build HTTP client"),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl EntityRecognizer for HttpRecognizer {
    async fn recognize(&self, text: &str) -> Result<Vec<EntitySpan>, RecognizerError> {
        let url = format!("{}/recognize", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(&RecognizeRequest { text })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(RecognizerError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: RecognizeResponse = response.json().await?;
        debug!("Recognizer returned {} spans", body.entities.len());
        Ok(body.entities)
    }
}
