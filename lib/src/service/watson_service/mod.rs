pub mod structs;

use anyhow::{Context, Result};
use reqwest::header::HeaderValue;
use reqwest::{Client, StatusCode, Url};
use thiserror::Error;
use tracing::{debug, error, warn};

use crate::config::ClassifierConfig;
use super::common_structs::{ClassificationResult, EmotionScores};
use structs::{EmotionPredictRequest, EmotionPredictResponse};

pub const MODEL_ID_HEADER: &str = "grpc-metadata-mm-model-id";


#[derive(Debug, Error)]
pub enum ClassifierError {
    #[error("Emotion service unreachable: {0}")]
    Network(reqwest::Error),

    #[error("Unable to send emotion request: {0}")]
    Request(reqwest::Error),

    #[error("Emotion service rejected the input (status {status})")]
    Rejected { status: u16 },

    #[error("Emotion service error (status {status})")]
    Remote { status: u16 },

    #[error("Malformed emotion response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Emotion response contained no predictions")]
    NoPredictions,
}

// Only transport failures count as the service being unreachable.
impl From<reqwest::Error> for ClassifierError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_connect() || error.is_timeout() || error.is_request() || error.is_body() {
            ClassifierError::Network(error)
        } else {
            ClassifierError::Request(error)
        }
    }
}


/// Adapter over the hosted Watson NLP `EmotionPredict` endpoint.
///
/// Cloning is cheap and clones share the underlying connection pool, so one
/// instance can serve concurrent requests.
#[derive(Debug, Clone)]
pub struct WatsonService {
    client: Client,
    endpoint_url: Url,
    model_id: HeaderValue,
    mock_on_network_failure: bool,
}

impl WatsonService {
    pub fn new(config: &ClassifierConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .context("Error building emotion service client")?;
        let endpoint_url = Url::parse(&config.endpoint_url)
            .with_context(|| format!("Invalid emotion endpoint url: {:?}", config.endpoint_url))?;
        let model_id = HeaderValue::from_str(&config.model_id)
            .with_context(|| format!("Invalid model id: {:?}", config.model_id))?;

        Ok(Self {
            client,
            endpoint_url,
            model_id,
            mock_on_network_failure: config.mock_on_network_failure,
        })
    }

    /// Classifies `text`. Never fails: remote errors become an unknown result,
    /// and network failures become either an unavailable result or the mock
    /// fallback, depending on configuration.
    pub async fn classify(&self, text: &str) -> ClassificationResult {
        match self.request_scores(text).await {
            Ok(scores) => {
                debug!(
                    text_len = text.len(),
                    dominant_emotion = %scores.dominant(),
                    "Emotion classification succeeded"
                );
                ClassificationResult::classified(scores)
            },
            Err(ClassifierError::Network(error)) => {
                if self.mock_on_network_failure {
                    warn!(%error, "Emotion service unreachable, serving mock scores");
                    ClassificationResult::mocked()
                } else {
                    error!(%error, "Emotion service unreachable");
                    ClassificationResult::unavailable()
                }
            },
            Err(error) => {
                warn!(%error, text_len = text.len(), "Emotion classification failed");
                ClassificationResult::unknown()
            },
        }
    }

    pub async fn request_scores(&self, text: &str) -> Result<EmotionScores, ClassifierError> {
        let response = self.client
            .post(self.endpoint_url.clone())
            .header(MODEL_ID_HEADER, self.model_id.clone())
            .json(&EmotionPredictRequest::new(text))
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::BAD_REQUEST {
            return Err(ClassifierError::Rejected { status: status.as_u16() });
        }
        if status != StatusCode::OK {
            return Err(ClassifierError::Remote { status: status.as_u16() });
        }

        let body = response.bytes().await?;
        let parsed: EmotionPredictResponse = serde_json::from_slice(&body)?;
        parsed.first_scores().ok_or(ClassifierError::NoPredictions)
    }
}
