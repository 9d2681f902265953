mod types;

pub use types::*;

use anyhow::{Context, Result};
use std::path::Path;

/// Environment variable holding the metadata provider key.
pub const API_KEY_VAR: &str = "API_KEY";
/// Environment variable holding the video provider key.
pub const VIDEO_API_KEY_VAR: &str = "YOUTUBE_API_KEY";

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    validate_config(&config)?;

    Ok(config)
}

/// Load config from default locations or return default config
pub fn load_config_or_default(custom_path: Option<&Path>) -> Result<Config> {
    if let Some(path) = custom_path {
        return load_config(path);
    }

    let default_paths = [
        "./config.toml",
        "./reelgate.toml",
        "~/.config/reelgate/config.toml",
    ];

    for path_str in default_paths {
        let path = shellexpand::tilde(path_str);
        let path = Path::new(path.as_ref());
        if path.exists() {
            return load_config(path);
        }
    }

    Ok(Config::default())
}

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    if config.server.port == 0 {
        anyhow::bail!("Server port cannot be 0");
    }

    let urls = [
        ("upstream.base_url", &config.upstream.base_url),
        ("embed.stream_base", &config.embed.stream_base),
        ("embed.embed_base", &config.embed.embed_base),
    ];
    for (name, url) in urls {
        if url.trim().is_empty() {
            anyhow::bail!("{} cannot be empty", name);
        }
    }

    if let Some(dir) = &config.server.static_dir {
        if !dir.exists() {
            tracing::warn!("Static directory does not exist: {:?}", dir);
        }
    }

    let mut seen = std::collections::HashSet::new();
    for game in &config.games {
        if !seen.insert(game.id) {
            anyhow::bail!("Game id {} is listed more than once", game.id);
        }
    }

    Ok(())
}

impl Secrets {
    /// Read both provider keys from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Resolve both keys through `lookup`. A missing or blank key is an error.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let require = |name: &str| {
            lookup(name)
                .filter(|v| !v.trim().is_empty())
                .with_context(|| format!("Missing required environment variable {}", name))
        };

        Ok(Self {
            api_key: require(API_KEY_VAR)?,
            video_api_key: require(VIDEO_API_KEY_VAR)?,
        })
    }
}
