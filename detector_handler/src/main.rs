mod handlers;
mod pages;
mod server;

use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use lib::config::{ClassifierConfig, DEFAULT_ENDPOINT_URL, DEFAULT_MODEL_ID, DEFAULT_TIMEOUT_SECS};
use lib::env_keys::{EMOTION_ENDPOINT_URL, EMOTION_MODEL_ID, EMOTION_TIMEOUT_SECS, HOST, LOG_LEVEL, MOCK_ON_NETWORK_FAILURE, PORT};
use lib::service::CommonService;
use tracing::{info, level_filters::LevelFilter, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};


#[derive(Parser, Debug)]
#[clap(about = "Web front-end for text emotion detection")]
struct CliArgs {
    /// The address to bind to.
    #[clap(long, env = HOST, default_value = "0.0.0.0")]
    pub host: String,

    /// The port to listen on.
    #[clap(short, long, env = PORT, default_value_t = 5000)]
    pub port: u16,

    /// URL of the remote EmotionPredict endpoint.
    #[clap(long, env = EMOTION_ENDPOINT_URL, default_value = DEFAULT_ENDPOINT_URL)]
    pub endpoint_url: String,

    /// Model identifier sent with every classification request.
    #[clap(long, env = EMOTION_MODEL_ID, default_value = DEFAULT_MODEL_ID)]
    pub model_id: String,

    /// Timeout in seconds for classification requests.
    #[clap(long, env = EMOTION_TIMEOUT_SECS, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// Serve fixed mock scores when the emotion service cannot be reached.
    #[clap(long, env = MOCK_ON_NETWORK_FAILURE)]
    pub mock_on_network_failure: bool,
}

impl CliArgs {
    fn classifier_config(&self) -> ClassifierConfig {
        ClassifierConfig {
            endpoint_url: self.endpoint_url.to_owned(),
            model_id: self.model_id.to_owned(),
            timeout: Duration::from_secs(self.timeout_secs),
            mock_on_network_failure: self.mock_on_network_failure,
        }
    }
}


#[tokio::main]
async fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var(LOG_LEVEL)
                .from_env_lossy(),
        )
        .try_init()
        .context("Error initialising logging")?;

    let config = cli_args.classifier_config();
    info!(
        endpoint = %config.endpoint_url,
        model_id = %config.model_id,
        timeout_secs = cli_args.timeout_secs,
        "Emotion service configured"
    );
    if config.mock_on_network_failure {
        warn!("Mock scores will be served whenever the emotion service is unreachable");
    }

    let service = CommonService::new(&config)?;
    let app = server::make_app(service);

    server::run_server(app, &cli_args.host, cli_args.port).await
}
