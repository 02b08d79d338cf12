//! Spotify Web API client implementing [`CatalogSource`].
//!
//! Authenticates with the client-credentials flow and caches the bearer
//! token until shortly before it expires. A lookup costs three requests:
//! track search, audio features, and the primary artist (for genres).

use super::key::{Mode, PitchClass};
use super::models::{AlbumRef, CatalogTrackInfo};
use super::source::CatalogSource;
use anyhow::{Context, Result};
use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::sync::Mutex;
use std::time::{Duration, Instant};
use tracing::{debug, info};

pub const SPOTIFY_API_BASE: &str = "https://api.spotify.com/v1";
pub const SPOTIFY_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
const TOKEN_EXPIRY_MARGIN: Duration = Duration::from_secs(60);

struct AccessToken {
    value: String,
    expires_at: Instant,
}

pub struct SpotifyClient {
    client: Client,
    client_id: String,
    client_secret: String,
    api_base: String,
    token_url: String,
    token: Mutex<Option<AccessToken>>,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: u64,
}

#[derive(Deserialize)]
struct SearchResponse {
    tracks: Option<TrackPage>,
}

#[derive(Deserialize)]
struct TrackPage {
    #[serde(default)]
    items: Vec<SpotifyTrack>,
}

#[derive(Deserialize)]
struct SpotifyTrack {
    id: String,
    name: String,
    #[serde(default)]
    popularity: u32,
    #[serde(default)]
    artists: Vec<SpotifyArtistRef>,
    album: SpotifyAlbum,
}

#[derive(Deserialize)]
struct SpotifyArtistRef {
    id: String,
    name: String,
}

#[derive(Deserialize)]
struct SpotifyAlbum {
    name: String,
    #[serde(default)]
    release_date: String,
    #[serde(default)]
    images: Vec<SpotifyImage>,
}

#[derive(Deserialize)]
struct SpotifyImage {
    url: String,
}

#[derive(Deserialize)]
struct AudioFeaturesResponse {
    tempo: f64,
    key: i32,
    mode: i32,
    energy: f64,
    danceability: f64,
    valence: f64,
    instrumentalness: Option<f64>,
}

#[derive(Deserialize)]
struct ArtistResponse {
    #[serde(default)]
    genres: Vec<String>,
}

impl SpotifyClient {
    pub fn new(client_id: &str, client_secret: &str, timeout_sec: u64) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_sec))
            .build()?;

        Ok(Self {
            client,
            client_id: client_id.to_string(),
            client_secret: client_secret.to_string(),
            api_base: SPOTIFY_API_BASE.to_string(),
            token_url: SPOTIFY_TOKEN_URL.to_string(),
            token: Mutex::new(None),
        })
    }

    /// Point the client at different endpoints (proxies, test servers).
    pub fn with_endpoints(mut self, api_base: &str, token_url: &str) -> Self {
        self.api_base = api_base.trim_end_matches('/').to_string();
        self.token_url = token_url.to_string();
        self
    }

    fn access_token(&self) -> Result<String> {
        let mut cached = self.token.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(token) = cached.as_ref() {
            if Instant::now() < token.expires_at {
                return Ok(token.value.clone());
            }
        }

        debug!("Requesting Spotify access token");
        let response = self
            .client
            .post(&self.token_url)
            .basic_auth(&self.client_id, Some(&self.client_secret))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .context("Failed to connect to Spotify accounts service")?;

        if !response.status().is_success() {
            anyhow::bail!(
                "Spotify token request failed with status {}",
                response.status()
            );
        }

        let body: TokenResponse = response
            .json()
            .context("Failed to parse Spotify token response")?;
        let lifetime = Duration::from_secs(body.expires_in).saturating_sub(TOKEN_EXPIRY_MARGIN);
        let value = body.access_token;
        *cached = Some(AccessToken {
            value: value.clone(),
            expires_at: Instant::now() + lifetime,
        });
        Ok(value)
    }

    fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T> {
        let token = self.access_token()?;
        let url = format!("{}{}", self.api_base, path);
        let response = self
            .client
            .get(&url)
            .bearer_auth(token)
            .query(query)
            .send()
            .with_context(|| format!("Failed to connect to Spotify for {}", path))?;

        if !response.status().is_success() {
            anyhow::bail!(
                "Spotify request {} failed with status {}",
                path,
                response.status()
            );
        }

        response
            .json()
            .with_context(|| format!("Failed to parse Spotify response for {}", path))
    }

    fn search_first_track(&self, query: &str) -> Result<Option<SpotifyTrack>> {
        let body: SearchResponse =
            self.get_json("/search", &[("q", query), ("type", "track"), ("limit", "1")])?;
        Ok(body
            .tracks
            .and_then(|page| page.items.into_iter().next()))
    }
}

impl CatalogSource for SpotifyClient {
    fn search_track(&self, query: &str) -> Result<Option<CatalogTrackInfo>> {
        let Some(track) = self.search_first_track(query)? else {
            info!("Spotify returned no tracks for {:?}", query);
            return Ok(None);
        };

        let features: AudioFeaturesResponse = self
            .get_json(&format!("/audio-features/{}", track.id), &[])
            .with_context(|| format!("Failed to fetch audio features for {}", track.id))?;

        let pitch_class = PitchClass::new(features.key)
            .with_context(|| format!("Spotify reported no usable key for {}", track.id))?;

        let primary_artist = track
            .artists
            .into_iter()
            .next()
            .with_context(|| format!("Track {} has no artists", track.id))?;

        let artist: ArtistResponse = self
            .get_json(&format!("/artists/{}", primary_artist.id), &[])
            .with_context(|| format!("Failed to fetch artist {}", primary_artist.id))?;

        debug!(
            "Spotify track {} ({} - {}), tempo={:.1}, key={}, mode={}",
            track.id, primary_artist.name, track.name, features.tempo, features.key, features.mode
        );

        Ok(Some(CatalogTrackInfo {
            id: track.id,
            name: track.name,
            artist_name: primary_artist.name,
            album: AlbumRef {
                name: track.album.name,
                image_urls: track.album.images.into_iter().map(|i| i.url).collect(),
            },
            release_date: track.album.release_date,
            popularity: track.popularity,
            tempo: features.tempo,
            pitch_class,
            mode: Mode::from_flag(features.mode),
            energy: features.energy,
            danceability: features.danceability,
            valence: features.valence,
            instrumentalness: features.instrumentalness,
            artist_genres: artist.genres,
        }))
    }
}
