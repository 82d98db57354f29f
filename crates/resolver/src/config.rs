//! Configuration for the resolver.

use serde::{Deserialize, Serialize};

/// Top-level resolver configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// External agent process settings
    #[serde(default)]
    pub agent: AgentConfig,
}

/// Settings for the external agent subprocess.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentConfig {
    /// Executable to invoke
    #[serde(default = "default_command")]
    pub command: String,

    /// Arguments placed before the instruction string
    #[serde(default = "default_args")]
    pub args: Vec<String>,

    /// Hard wall-clock budget per invocation, milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_command() -> String {
    "nanobot".into()
}

fn default_args() -> Vec<String> {
    vec!["agent".into(), "-m".into()]
}

fn default_timeout_ms() -> u64 {
    30_000
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            command: default_command(),
            args: default_args(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl ResolverConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }
}
