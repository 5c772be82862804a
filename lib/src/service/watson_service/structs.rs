use serde::{Deserialize, Serialize};

use crate::service::common_structs::EmotionScores;


#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct EmotionPredictRequest<'a> {
    pub raw_document: RawDocument<'a>,
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct RawDocument<'a> {
    pub text: &'a str,
}

impl<'a> EmotionPredictRequest<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            raw_document: RawDocument { text }
        }
    }
}


#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EmotionPredictResponse {
    #[serde(default)]
    pub emotion_predictions: Vec<EmotionPrediction>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct EmotionPrediction {
    pub emotion: EmotionMap,
}

// Any emotion the service leaves out reads as 0.0.
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct EmotionMap {
    #[serde(default)]
    pub anger: Option<f64>,
    #[serde(default)]
    pub disgust: Option<f64>,
    #[serde(default)]
    pub fear: Option<f64>,
    #[serde(default)]
    pub joy: Option<f64>,
    #[serde(default)]
    pub sadness: Option<f64>,
}

impl From<&EmotionMap> for EmotionScores {
    fn from(map: &EmotionMap) -> Self {
        Self {
            anger: map.anger.unwrap_or(0.0),
            disgust: map.disgust.unwrap_or(0.0),
            fear: map.fear.unwrap_or(0.0),
            joy: map.joy.unwrap_or(0.0),
            sadness: map.sadness.unwrap_or(0.0),
        }
    }
}

impl EmotionPredictResponse {
    pub fn first_scores(&self) -> Option<EmotionScores> {
        self.emotion_predictions.first().map(|p| EmotionScores::from(&p.emotion))
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_body_shape() {
        let body = serde_json::to_value(EmotionPredictRequest::new("I am happy")).unwrap();
        assert_eq!(body, json!({"raw_document": {"text": "I am happy"}}));
    }

    #[test]
    fn reads_first_prediction_and_ignores_extra_fields() {
        let response: EmotionPredictResponse = serde_json::from_value(json!({
            "emotionPredictions": [
                {
                    "emotion": {"anger": 0.01, "disgust": 0.02, "fear": 0.03, "joy": 0.9, "sadness": 0.04},
                    "target": "",
                    "emotionMentions": []
                },
                {
                    "emotion": {"anger": 0.9, "disgust": 0.0, "fear": 0.0, "joy": 0.0, "sadness": 0.0}
                }
            ],
            "producerId": {"name": "Ensemble Aggregated Emotion Workflow", "version": "0.0.1"}
        })).unwrap();

        let scores = response.first_scores().unwrap();
        assert_eq!(scores.joy, 0.9);
        assert_eq!(scores.anger, 0.01);
    }

    #[test]
    fn missing_emotions_default_to_zero() {
        let response: EmotionPredictResponse = serde_json::from_value(json!({
            "emotionPredictions": [{"emotion": {"joy": 0.5}}]
        })).unwrap();

        let scores = response.first_scores().unwrap();
        assert_eq!(scores.joy, 0.5);
        assert_eq!(scores.anger, 0.0);
        assert_eq!(scores.sadness, 0.0);
    }

    #[test]
    fn no_predictions() {
        let response: EmotionPredictResponse = serde_json::from_value(json!({})).unwrap();
        assert!(response.first_scores().is_none());
    }
}
