use config::{Config, ConfigError, Environment, File};
use pulse_sdk::models::sentiment::{DEFAULT_MAX_INPUT_CHARS, TWITTER_ROBERTA_LATEST_ID};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Prefix for environment overrides, e.g. `PULSE__WORKFLOW__ENDPOINT_URL`
pub const ENV_PREFIX: &str = "PULSE";

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ApiConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub workflow: WorkflowConfig,
    #[serde(default)]
    pub sentiment: SentimentConfig,
    pub cors: Option<CorsConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct WorkflowConfig {
    /// Signed trigger URL; the query string is the credential
    #[serde(default)]
    pub endpoint_url: String,
    /// Unset means the request may wait indefinitely
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct SentimentConfig {
    pub provider: String,
    pub model: String,
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub max_input_chars: usize,
    /// Load the model at start-up instead of on the first submission
    pub preload: bool,
}

impl Default for SentimentConfig {
    fn default() -> Self {
        Self {
            provider: pulse_sdk::providers::HUGGINGFACE.to_string(),
            model: TWITTER_ROBERTA_LATEST_ID.to_string(),
            api_key: None,
            base_url: None,
            max_input_chars: DEFAULT_MAX_INPUT_CHARS,
            preload: false,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LoggingConfig {
    /// Directory for daily-rotated log files, in addition to stdout
    pub directory: Option<PathBuf>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            workflow: WorkflowConfig::default(),
            sentiment: SentimentConfig::default(),
            cors: None,
            logging: None,
        }
    }
}

impl ApiConfig {
    /// Load configuration from `path`, or from the per-user config file.
    ///
    /// A missing per-user file is created with commented defaults. An explicit
    /// path must exist. Environment variables override file values.
    pub fn load(path: Option<PathBuf>) -> Result<(Self, PathBuf), ConfigError> {
        let config_path = match path {
            Some(path) => {
                let path = expand_tilde(&path);
                if !path.exists() {
                    return Err(ConfigError::Message(format!(
                        "Config file not found: {}",
                        path.display()
                    )));
                }
                path
            }
            None => {
                let path = get_config_path();
                write_default_config(&path)?;
                path
            }
        };

        let config = Self::from_file(&config_path, ENV_PREFIX)?;
        Ok((config, config_path))
    }

    fn from_file(path: &Path, env_prefix: &str) -> Result<Self, ConfigError> {
        let builder = Config::builder()
            .add_source(File::from(path.to_path_buf()))
            .add_source(
                Environment::with_prefix(env_prefix)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let mut config: ApiConfig = builder.try_deserialize()?;

        if let Some(logging) = config.logging.as_mut() {
            if let Some(dir) = logging.directory.as_ref() {
                logging.directory = Some(expand_tilde(dir));
            }
        }

        Ok(config)
    }

    /// Reject settings the service cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.workflow.endpoint_url.trim().is_empty() {
            return Err(ConfigError::Message(
                "workflow.endpoint_url is not set; add it to the config file or set PULSE__WORKFLOW__ENDPOINT_URL".to_string(),
            ));
        }

        match self.sentiment.provider.as_str() {
            pulse_sdk::providers::HUGGINGFACE | pulse_sdk::providers::LOCAL => {}
            other => {
                return Err(ConfigError::Message(format!(
                    "Unsupported sentiment provider '{}'. Options: huggingface, local",
                    other
                )));
            }
        }

        if self.sentiment.max_input_chars == 0 {
            return Err(ConfigError::Message(
                "sentiment.max_input_chars must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

fn write_default_config(config_path: &Path) -> Result<(), ConfigError> {
    // Create config directory if it doesn't exist
    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            ConfigError::Message(format!("Failed to create config directory: {e}"))
        })?;
    }

    if config_path.exists() {
        return Ok(());
    }

    let default_config = format!(
        r#"
[server]
host = "127.0.0.1"
port = 8080

[workflow]
# Signed HTTP trigger of the automation flow that appends rows to the spreadsheet
endpoint_url = ""
# timeout_secs = 30

[sentiment]
# "huggingface" (hosted) or "local" (in-process, needs the `local` build feature)
provider = "huggingface"
# For "local": modernbert-base or modernbert-large
model = "{}"
max_input_chars = {}
preload = false
# api_key = "hf_your_token"
# base_url = "https://router.huggingface.co/hf-inference"

# Only needed for browser clients on other origins; list this server's own origin too
# [cors]
# allowed_origins = ["http://localhost:3000"]

# [logging]
# directory = "~/.local/state/team-pulse"
"#,
        TWITTER_ROBERTA_LATEST_ID, DEFAULT_MAX_INPUT_CHARS
    );
    std::fs::write(config_path, default_config)
        .map_err(|e| ConfigError::Message(format!("Failed to write default config: {e}")))
}

fn expand_tilde(path: &Path) -> PathBuf {
    if path.starts_with("~") {
        if let Some(home) = home::home_dir() {
            let path_str = path.to_string_lossy();
            let expanded = path_str.replacen("~", &home.to_string_lossy(), 1);
            return PathBuf::from(expanded);
        }
    }
    path.to_path_buf()
}

fn get_config_path() -> PathBuf {
    if let Some(config_dir) = dirs::config_dir() {
        config_dir.join("team-pulse/api.toml")
    } else {
        PathBuf::from("api.toml")
    }
}
