use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{FinseeError, Result};

/// Environment variable holding the hosted completion service credential.
///
/// Deliberately not part of the TOML file so the secret never lands on disk.
pub const API_KEY_ENV: &str = "GROQ_API_KEY";

/// Top-level configuration for the FinSee application.
///
/// Loaded from `~/.finsee/config.toml` by default. Each section corresponds
/// to a subsystem or cross-cutting concern.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FinseeConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub speech: SpeechConfig,
    #[serde(default)]
    pub interpreter: InterpreterConfig,
    #[serde(default)]
    pub advisor: AdvisorConfig,
}

impl FinseeConfig {
    /// Load configuration from a TOML file.
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: FinseeConfig = toml::from_str(&content)?;
        info!("Configuration loaded from {}", path.display());
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist or cannot be parsed.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(
                    "Failed to load config from {}: {}. Using defaults.",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Save the current configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| FinseeError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        info!("Configuration saved to {}", path.display());
        Ok(())
    }
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// API server port.
    pub port: u16,
    /// Log level: trace, debug, info, warn, error.
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            port: 3030,
            log_level: "info".to_string(),
        }
    }
}

/// Speech recognition and synthesis settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeechConfig {
    /// Delay before restarting recognition after a transient engine error.
    pub restart_delay_ms: u64,
    /// Maximum consecutive restarts after non-trivial engine errors.
    /// "No speech detected" restarts do not count against this budget.
    pub max_restarts: u32,
    /// Capacity of the finalized-transcript channel.
    pub transcript_buffer: usize,
    /// Capacity of the synthesis queue channel.
    pub synthesis_buffer: usize,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            restart_delay_ms: 1000,
            max_restarts: 30,
            transcript_buffer: 32,
            synthesis_buffer: 32,
        }
    }
}

/// Command interpreter settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InterpreterConfig {
    /// Minimum normalized similarity for a fuzzy bank-name match (0.0-1.0).
    /// Utterances scoring below this against every known bank parse as
    /// no match, forcing a reprompt.
    pub bank_match_threshold: f64,
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        Self {
            bank_match_threshold: 0.84,
        }
    }
}

/// Hosted chat-completion (financial advisor) settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AdvisorConfig {
    /// Base URL of the completion service.
    pub base_url: String,
    /// Model identifier sent with each request.
    pub model: String,
    /// Sampling temperature.
    pub temperature: f64,
    /// Completion token limit.
    pub max_tokens: u32,
    /// HTTP request timeout in seconds. The upstream call has no inherent
    /// bound, so an explicit timeout is required.
    pub request_timeout_secs: u64,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.groq.com".to_string(),
            model: "mixtral-8x7b-32768".to_string(),
            temperature: 0.7,
            max_tokens: 1024,
            request_timeout_secs: 30,
        }
    }
}
