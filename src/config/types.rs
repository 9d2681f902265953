use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub upstream: UpstreamConfig,

    #[serde(default)]
    pub embed: EmbedConfig,

    /// Browser games served by `/v3/games`. Loaded once, never mutated.
    #[serde(default = "default_games")]
    pub games: Vec<Game>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            upstream: UpstreamConfig::default(),
            embed: EmbedConfig::default(),
            games: default_games(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory of static assets served for unmatched paths.
    #[serde(default)]
    pub static_dir: Option<PathBuf>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}
fn default_port() -> u16 {
    3020
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: None,
        }
    }
}

/// Metadata provider settings. The API key is read from the environment,
/// never from this file.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpstreamConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_language")]
    pub language: String,
}

fn default_base_url() -> String {
    "https://api.themoviedb.org/3".to_string()
}
fn default_language() -> String {
    "en".to_string()
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            language: default_language(),
        }
    }
}

/// Secondary asset provider used for stream targets and embed redirects.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EmbedConfig {
    #[serde(default = "default_stream_base")]
    pub stream_base: String,

    #[serde(default = "default_embed_base")]
    pub embed_base: String,
}

fn default_stream_base() -> String {
    "https://play2.123embed.net".to_string()
}
fn default_embed_base() -> String {
    "https://swiflytvapiembed.onrender.com".to_string()
}

impl Default for EmbedConfig {
    fn default() -> Self {
        Self {
            stream_base: default_stream_base(),
            embed_base: default_embed_base(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Game {
    pub id: u64,
    pub image: String,
    pub game_url: String,
}

fn default_games() -> Vec<Game> {
    vec![Game {
        id: 1,
        image: "https://subway-surfers.lukasallis-robe.repl.co/th.jpg".to_string(),
        game_url: "https://subway-surfers.lukasallis-robe.repl.co/".to_string(),
    }]
}

/// Provider credentials, taken from the process environment at boot.
#[derive(Clone)]
pub struct Secrets {
    pub api_key: String,
    pub video_api_key: String,
}

impl std::fmt::Debug for Secrets {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Secrets")
            .field("api_key", &"<redacted>")
            .field("video_api_key", &"<redacted>")
            .finish()
    }
}
