use std::fmt;
use serde::Serialize;


#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Emotion {
    Anger,
    Disgust,
    Fear,
    Joy,
    Sadness,
}

impl Emotion {
    /// Declaration order. Argmax ties resolve to the earliest entry.
    pub const ALL: [Emotion; 5] = [
        Emotion::Anger,
        Emotion::Disgust,
        Emotion::Fear,
        Emotion::Joy,
        Emotion::Sadness,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Emotion::Anger => "anger",
            Emotion::Disgust => "disgust",
            Emotion::Fear => "fear",
            Emotion::Joy => "joy",
            Emotion::Sadness => "sadness",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Emotion::Anger => "Anger",
            Emotion::Disgust => "Disgust",
            Emotion::Fear => "Fear",
            Emotion::Joy => "Joy",
            Emotion::Sadness => "Sadness",
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}


#[derive(Debug, Serialize, Clone, Copy, PartialEq)]
pub struct EmotionScores {
    pub anger: f64,
    pub disgust: f64,
    pub fear: f64,
    pub joy: f64,
    pub sadness: f64,
}

impl EmotionScores {
    pub fn score(&self, emotion: Emotion) -> f64 {
        match emotion {
            Emotion::Anger => self.anger,
            Emotion::Disgust => self.disgust,
            Emotion::Fear => self.fear,
            Emotion::Joy => self.joy,
            Emotion::Sadness => self.sadness,
        }
    }

    pub fn dominant(&self) -> Emotion {
        let mut dominant = Emotion::Anger;
        for emotion in Emotion::ALL.into_iter().skip(1) {
            if self.score(emotion) > self.score(dominant) {
                dominant = emotion;
            }
        }
        dominant
    }

    /// Canned "joyful" scores served in place of a real answer when the
    /// endpoint cannot be reached and the mock fallback is switched on.
    pub fn fallback() -> Self {
        Self {
            anger: 0.005,
            disgust: 0.002,
            fear: 0.001,
            joy: 0.987,
            sadness: 0.005,
        }
    }
}


#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ClassificationStatus {
    /// The endpoint answered 200 with usable scores.
    Classified,
    /// The endpoint rejected the input or failed. 400 and other non-2xx are not told apart.
    Unknown,
    /// Connection error or timeout, with the mock fallback disabled.
    Unavailable,
    /// Connection error or timeout, answered with `EmotionScores::fallback`.
    Mocked,
}


/// Outcome of a single classification. `dominant_emotion` is present exactly
/// when `scores` is, and always names the argmax of those scores.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct ClassificationResult {
    status: ClassificationStatus,
    scores: Option<EmotionScores>,
    dominant_emotion: Option<Emotion>,
}

impl ClassificationResult {
    pub fn classified(scores: EmotionScores) -> Self {
        Self::with_scores(ClassificationStatus::Classified, scores)
    }

    pub fn mocked() -> Self {
        Self::with_scores(ClassificationStatus::Mocked, EmotionScores::fallback())
    }

    pub fn unknown() -> Self {
        Self::without_scores(ClassificationStatus::Unknown)
    }

    pub fn unavailable() -> Self {
        Self::without_scores(ClassificationStatus::Unavailable)
    }

    fn with_scores(status: ClassificationStatus, scores: EmotionScores) -> Self {
        Self {
            status,
            dominant_emotion: Some(scores.dominant()),
            scores: Some(scores),
        }
    }

    fn without_scores(status: ClassificationStatus) -> Self {
        Self {
            status,
            scores: None,
            dominant_emotion: None,
        }
    }

    pub fn status(&self) -> ClassificationStatus {
        self.status
    }

    pub fn scores(&self) -> Option<&EmotionScores> {
        self.scores.as_ref()
    }

    pub fn score(&self, emotion: Emotion) -> Option<f64> {
        self.scores.map(|s| s.score(emotion))
    }

    pub fn dominant_emotion(&self) -> Option<Emotion> {
        self.dominant_emotion
    }
}
