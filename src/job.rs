use std::sync::Arc;

use chrono::Local;
use log::{debug, info};

use crate::clients::errors::Result;
use crate::clients::spotify::SpotifyClient;
use crate::clients::storage::{ObjectStore, S3Store};
use crate::extract::extract;
use crate::publish::{artifact_key, publish};

/// The "Top 50 Global" editorial playlist.
pub const TOP50_GLOBAL_PLAYLIST_ID: &str = "37i9dQZEVXbMDoHDwVN2tF";

/// Configuration for the Exporter, built once at startup and passed by
/// parameter into each stage. No ambient globals.
pub struct Config {
    /// Spotify Web API client
    pub spotify: SpotifyClient,
    /// Destination object store
    pub storage: Arc<dyn ObjectStore>,
    /// Playlist to export
    pub playlist_id: String,
}

/// Builder filling unset fields from the environment.
pub struct ConfigBuilder {
    spotify: Option<SpotifyClient>,
    storage: Option<Arc<dyn ObjectStore>>,
    playlist_id: Option<String>,
}

impl ConfigBuilder {
    /// Empty builder; every field falls back to its environment default.
    #[must_use]
    pub fn new() -> Self {
        ConfigBuilder {
            spotify: None,
            storage: None,
            playlist_id: None,
        }
    }

    /// Use an already-constructed Spotify client.
    #[must_use]
    pub fn spotify(mut self, spotify: SpotifyClient) -> Self {
        self.spotify = Some(spotify);
        self
    }

    /// Use an already-constructed object store.
    #[must_use]
    pub fn storage(mut self, storage: Arc<dyn ObjectStore>) -> Self {
        self.storage = Some(storage);
        self
    }

    /// Override the playlist id; `None` keeps the environment default.
    #[must_use]
    pub fn playlist_id(mut self, playlist_id: Option<String>) -> Self {
        self.playlist_id = playlist_id;
        self
    }

    /// Resolve unset fields from the environment and build the config.
    ///
    /// The playlist id falls back to `SPOTIFY_PLAYLIST_ID`, then to the
    /// Top 50 Global constant.
    pub async fn build(self) -> Result<Config> {
        let spotify = match self.spotify {
            Some(s) => s,
            None => SpotifyClient::try_default()?,
        };
        let storage: Arc<dyn ObjectStore> = match self.storage {
            Some(s) => s,
            None => Arc::new(S3Store::try_default().await?),
        };
        let playlist_id = match self.playlist_id {
            Some(id) => id,
            None => std::env::var("SPOTIFY_PLAYLIST_ID")
                .unwrap_or_else(|_| TOP50_GLOBAL_PLAYLIST_ID.to_string()),
        };
        Ok(Config {
            spotify,
            storage,
            playlist_id,
        })
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// The exporter runs the four stages strictly in sequence: authenticate,
/// fetch, extract, publish.
pub struct Exporter {
    config: Config,
}

impl Exporter {
    /// Wrap a built configuration.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Exporter { config }
    }

    /// Run the pipeline once. Returns the object key of the published
    /// artifact.
    ///
    /// Each stage runs to completion before the next starts; any stage error
    /// aborts the run and nothing is written.
    pub async fn run(&self) -> Result<String> {
        info!("Starting chart export ...");
        let token = self.config.spotify.fetch_token().await?;

        debug!("Fetching tracks for playlist {} ...", self.config.playlist_id);
        let items = self
            .config
            .spotify
            .playlist_tracks(&token, &self.config.playlist_id)
            .await?;
        debug!("Fetched {} playlist items", items.len());

        let records = extract(&items)?;
        if records.is_empty() {
            info!("Playlist returned no items; publishing an empty chart");
        }

        let key = artifact_key(Local::now().date_naive());
        publish(self.config.storage.as_ref(), &key, &records).await?;

        info!("Published {} records to {key}", records.len());
        Ok(key)
    }
}
