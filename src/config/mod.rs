mod file_config;

pub use file_config::{FileConfig, SpotifyConfig, WikipediaConfig};

use crate::catalog::spotify::{SPOTIFY_API_BASE, SPOTIFY_TOKEN_URL};
use crate::encyclopedia::wikipedia::WIKIPEDIA_API_URL;
use anyhow::Result;

pub const DEFAULT_REQUEST_TIMEOUT_SEC: u64 = 30;

pub fn default_user_agent() -> String {
    format!("songprompt/{}", env!("CARGO_PKG_VERSION"))
}

/// CLI arguments that can be used for config resolution.
/// This struct mirrors the CLI arguments that can be overridden by TOML config.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub spotify_client_id: Option<String>,
    pub spotify_client_secret: Option<String>,
    pub request_timeout_sec: u64,
    pub seed: Option<u64>,
    pub no_encyclopedia: bool,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub request_timeout_sec: u64,
    pub seed: Option<u64>,

    pub spotify: SpotifySettings,
    pub wikipedia: WikipediaSettings,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SpotifySettings {
    pub client_id: String,
    pub client_secret: String,
    pub api_url: String,
    pub token_url: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WikipediaSettings {
    pub enabled: bool,
    pub api_url: String,
    pub user_agent: String,
}

impl Default for WikipediaSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            api_url: WIKIPEDIA_API_URL.to_string(),
            user_agent: default_user_agent(),
        }
    }
}

impl AppConfig {
    /// Resolve configuration from CLI arguments and optional TOML file config.
    /// TOML values override CLI values where present.
    pub fn resolve(cli: &CliConfig, file_config: Option<FileConfig>) -> Result<Self> {
        let file = file_config.unwrap_or_default();

        let request_timeout_sec = file.request_timeout_sec.unwrap_or(cli.request_timeout_sec);
        if request_timeout_sec == 0 {
            anyhow::bail!("request_timeout_sec must be greater than zero");
        }
        let seed = file.seed.or(cli.seed);

        let spotify_file = file.spotify.unwrap_or_default();
        let client_id = spotify_file
            .client_id
            .or_else(|| cli.spotify_client_id.clone())
            .filter(|id| !id.is_empty())
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "Spotify client id must be specified via --spotify-client-id, SPOTIFY_CLIENT_ID or in config file"
                )
            })?;
        let client_secret = spotify_file
            .client_secret
            .or_else(|| cli.spotify_client_secret.clone())
            .filter(|secret| !secret.is_empty())
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "Spotify client secret must be specified via --spotify-client-secret, SPOTIFY_CLIENT_SECRET or in config file"
                )
            })?;
        let spotify = SpotifySettings {
            client_id,
            client_secret,
            api_url: spotify_file
                .api_url
                .unwrap_or_else(|| SPOTIFY_API_BASE.to_string()),
            token_url: spotify_file
                .token_url
                .unwrap_or_else(|| SPOTIFY_TOKEN_URL.to_string()),
        };

        // Wikipedia settings - merge file config with defaults
        let wiki_file = file.wikipedia.unwrap_or_default();
        let defaults = WikipediaSettings::default();
        let wikipedia = WikipediaSettings {
            enabled: wiki_file.enabled.unwrap_or(!cli.no_encyclopedia),
            api_url: wiki_file.api_url.unwrap_or(defaults.api_url),
            user_agent: wiki_file.user_agent.unwrap_or(defaults.user_agent),
        };

        Ok(Self {
            request_timeout_sec,
            seed,
            spotify,
            wikipedia,
        })
    }
}
