use std::time::Duration;


pub const DEFAULT_ENDPOINT_URL: &str = "https://sn-watson-emotion.labs.skills.network/v1/watson.runtime.nlp.v1/NlpService/EmotionPredict";
pub const DEFAULT_MODEL_ID: &str = "emotion_aggregated-workflow_lang_en_stock";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Everything the classifier adapter needs to reach the remote emotion endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifierConfig {
    pub endpoint_url: String,
    /// Sent as the `grpc-metadata-mm-model-id` header.
    pub model_id: String,
    pub timeout: Duration,
    /// When set, a network failure yields the fixed mock scores instead of an unavailable result.
    pub mock_on_network_failure: bool,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            endpoint_url: DEFAULT_ENDPOINT_URL.to_owned(),
            model_id: DEFAULT_MODEL_ID.to_owned(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            mock_on_network_failure: false,
        }
    }
}

impl ClassifierConfig {
    pub fn with_endpoint(mut self, endpoint_url: &str) -> Self {
        self.endpoint_url = endpoint_url.to_owned();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_mock_on_network_failure(mut self, enabled: bool) -> Self {
        self.mock_on_network_failure = enabled;
        self
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_hosted_watson_endpoint() {
        let config = ClassifierConfig::default();
        assert!(config.endpoint_url.ends_with("/NlpService/EmotionPredict"));
        assert_eq!(config.model_id, "emotion_aggregated-workflow_lang_en_stock");
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert!(!config.mock_on_network_failure);
    }

    #[test]
    fn builders_override_single_fields() {
        let config = ClassifierConfig::default()
            .with_endpoint("http://127.0.0.1:9/predict")
            .with_timeout(Duration::from_millis(250))
            .with_mock_on_network_failure(true);
        assert_eq!(config.endpoint_url, "http://127.0.0.1:9/predict");
        assert_eq!(config.model_id, DEFAULT_MODEL_ID);
        assert_eq!(config.timeout, Duration::from_millis(250));
        assert!(config.mock_on_network_failure);
    }
}
