pub static EMOTION_ENDPOINT_URL: &str = "EMOTION_ENDPOINT_URL";
pub static EMOTION_MODEL_ID: &str = "EMOTION_MODEL_ID";
pub static EMOTION_TIMEOUT_SECS: &str = "EMOTION_TIMEOUT_SECS";
pub static MOCK_ON_NETWORK_FAILURE: &str = "MOCK_ON_NETWORK_FAILURE";

pub static HOST: &str = "HOST";
pub static PORT: &str = "PORT";
pub static LOG_LEVEL: &str = "LOG_LEVEL";
