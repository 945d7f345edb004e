//! Layered TOML configuration.
//!
//! Sources, later overriding earlier:
//! - Bundled defaults (`slidecast.toml` compiled into the binary)
//! - `slidecast/slidecast.toml` in the user configuration directory
//! - `./slidecast.toml`

use crate::{RetryPolicy, Tier};
use config::{Config, File, FileFormat};
use serde::{Deserialize, Serialize};
use slidecast_error::{
    ConfigError, ProviderError, ProviderErrorKind, SlidecastError, SlidecastResult,
};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, instrument};

const DEFAULT_CONFIG: &str = include_str!("../../../slidecast.toml");

/// Limits for one fan-out.
///
/// ```toml
/// [fan_out.synthesis]
/// name = "Speech synthesis"
/// max_concurrent = 5
/// rpm = 100
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TierConfig {
    /// Display name
    pub name: String,
    /// Requests per minute
    #[serde(default)]
    pub rpm: Option<u32>,
    /// Requests per day
    #[serde(default)]
    pub rpd: Option<u32>,
    /// Simultaneous operations
    #[serde(default)]
    pub max_concurrent: Option<u32>,
    /// First retry delay in milliseconds
    #[serde(default)]
    pub initial_backoff_ms: Option<u64>,
    /// Retries after the first attempt
    #[serde(default)]
    pub max_retries: Option<usize>,
    /// Cap on a single retry delay in seconds
    #[serde(default)]
    pub max_delay_secs: Option<u64>,
}

impl TierConfig {
    /// A tier that only bounds concurrency.
    pub fn fan_out(name: impl Into<String>, max_concurrent: u32) -> Self {
        Self {
            name: name.into(),
            rpm: None,
            rpd: None,
            max_concurrent: Some(max_concurrent),
            initial_backoff_ms: None,
            max_retries: None,
            max_delay_secs: None,
        }
    }
}

impl Tier for TierConfig {
    fn rpm(&self) -> Option<u32> {
        self.rpm
    }

    fn rpd(&self) -> Option<u32> {
        self.rpd
    }

    fn max_concurrent(&self) -> Option<u32> {
        self.max_concurrent
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn retry_policy(&self) -> RetryPolicy {
        let default = RetryPolicy::default();
        RetryPolicy {
            initial_backoff: self
                .initial_backoff_ms
                .map(Duration::from_millis)
                .unwrap_or(default.initial_backoff),
            factor: default.factor,
            max_delay: self
                .max_delay_secs
                .map(Duration::from_secs)
                .unwrap_or(default.max_delay),
            max_retries: self.max_retries.unwrap_or(default.max_retries),
        }
    }
}

/// Limits for the two generation fan-outs.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct FanOutConfig {
    /// Narration synthesis and upload
    pub synthesis: TierConfig,
    /// Image resolution
    pub illustration: TierConfig,
}

impl Default for FanOutConfig {
    fn default() -> Self {
        Self {
            synthesis: TierConfig::fan_out("Speech synthesis", 5),
            illustration: TierConfig::fan_out("Image search", 5),
        }
    }
}

/// Chat-completion endpoint settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LanguageModelConfig {
    /// API root, without the `/v1/...` path
    pub base_url: String,
    /// Model used for slide generation
    pub model: String,
    /// Model used for chat titles
    pub title_model: String,
    /// Completion token limit
    pub max_tokens: u32,
    /// Request a JSON object response
    pub json_mode: bool,
    /// Environment variable holding the API key
    pub api_key_env: String,
}

impl Default for LanguageModelConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com".to_string(),
            model: "gpt-4o".to_string(),
            title_model: "gpt-4o-mini".to_string(),
            max_tokens: 4095,
            json_mode: true,
            api_key_env: "OPENAI_API_KEY".to_string(),
        }
    }
}

/// Text-to-speech settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SpeechConfig {
    /// API root
    pub base_url: String,
    /// Voice identifier
    pub voice_id: String,
    /// Synthesis model
    pub model_id: String,
    /// Environment variable holding the API key
    pub api_key_env: String,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.elevenlabs.io".to_string(),
            voice_id: "21m00Tcm4TlvDq8ikWAM".to_string(),
            model_id: "eleven_multilingual_v2".to_string(),
            api_key_env: "ELEVENLABS_API_KEY".to_string(),
        }
    }
}

/// Image search settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ImageSearchConfig {
    /// API root
    pub base_url: String,
    /// Search engine name
    pub engine: String,
    /// Search location
    pub location: String,
    /// Environment variable holding the API key
    pub api_key_env: String,
}

impl Default for ImageSearchConfig {
    fn default() -> Self {
        Self {
            base_url: "https://serpapi.com".to_string(),
            engine: "google_images".to_string(),
            location: "Canada".to_string(),
            api_key_env: "SERPAPI_API_KEY".to_string(),
        }
    }
}

/// Blob storage settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Root directory for stored clips
    pub path: PathBuf,
    /// Public URL prefix for stored clips
    #[serde(default)]
    pub public_url: Option<String>,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("slidecast-media"),
            public_url: None,
        }
    }
}

/// HTTP API settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Listen address
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:3000".to_string(),
        }
    }
}

/// Top-level Slidecast configuration.
///
/// # Example
///
/// ```no_run
/// use slidecast_rate_limit::SlidecastConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = SlidecastConfig::load()?;
/// println!("Synthesis fan-out: {:?}", config.fan_out.synthesis.max_concurrent);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Default)]
pub struct SlidecastConfig {
    /// Fan-out limits
    #[serde(default)]
    pub fan_out: FanOutConfig,
    /// Language model
    #[serde(default)]
    pub language_model: LanguageModelConfig,
    /// Speech synthesis
    #[serde(default)]
    pub speech: SpeechConfig,
    /// Image search
    #[serde(default)]
    pub images: ImageSearchConfig,
    /// Blob storage
    #[serde(default)]
    pub storage: StorageConfig,
    /// HTTP API
    #[serde(default)]
    pub server: ServerConfig,
}

impl SlidecastConfig {
    /// Load bundled defaults overlaid with a specific file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> SlidecastResult<Self> {
        debug!("Loading configuration from file");

        let builder = Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .add_source(File::from(path.as_ref()));

        Self::finish(builder, &format!("{}", path.as_ref().display()))
    }

    /// Load with precedence: current dir > user config dir > bundled defaults.
    ///
    /// User files are optional and silently skipped when absent.
    #[instrument]
    pub fn load() -> SlidecastResult<Self> {
        debug!("Loading configuration with precedence: current dir > user config dir > bundled defaults");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(user_config) = user_config_path() {
            builder = builder.add_source(File::from(user_config).required(false));
        }

        builder = builder.add_source(File::with_name("slidecast").required(false));

        Self::finish(builder, "layered sources")
    }

    /// Bundled defaults only.
    pub fn bundled() -> SlidecastResult<Self> {
        let builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));
        Self::finish(builder, "bundled defaults")
    }

    fn finish(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
        origin: &str,
    ) -> SlidecastResult<Self> {
        let config: Self = builder
            .build()
            .map_err(|e| {
                SlidecastError::from(ConfigError::new(format!(
                    "Failed to read configuration from {}: {}",
                    origin, e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                SlidecastError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject limits that can never admit an operation.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] naming the first fan-out with
    /// `max_concurrent = 0`.
    pub fn validate(&self) -> SlidecastResult<()> {
        for (section, tier) in [
            ("fan_out.synthesis", &self.fan_out.synthesis),
            ("fan_out.illustration", &self.fan_out.illustration),
        ] {
            if tier.max_concurrent == Some(0) {
                return Err(ConfigError::new(format!(
                    "{}.max_concurrent must be at least 1",
                    section
                ))
                .into());
            }
        }
        Ok(())
    }
}

/// Location of the per-user configuration file.
///
/// `slidecast/slidecast.toml` under the platform configuration directory
/// (`$XDG_CONFIG_HOME` or `~/.config` on Linux).
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("slidecast").join("slidecast.toml"))
}

/// Read an API key from the environment variable `name`.
///
/// # Errors
///
/// Returns [`ProviderErrorKind::MissingApiKey`] when the variable is unset or empty.
pub fn api_key_from_env(name: &str) -> SlidecastResult<String> {
    match std::env::var(name) {
        Ok(key) if !key.trim().is_empty() => Ok(key),
        _ => Err(ProviderError::new(ProviderErrorKind::MissingApiKey(name.to_string())).into()),
    }
}
