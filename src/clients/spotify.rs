use std::time::Duration;

use log::debug;
use reqwest::{Client, StatusCode};
use serde::Deserialize;

use crate::clients::entities::{AccessToken, PlaylistItem, PlaylistTracksPage};
use crate::clients::errors::{Error, Result};

const ACCOUNTS_BASE: &str = "https://accounts.spotify.com";
const API_BASE: &str = "https://api.spotify.com";

// The source applies no timeout at all; cap requests so a stalled connection
// cannot hang the invocation.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Client id/secret pair for the client-credentials grant.
#[derive(Debug, Clone)]
pub struct Credentials {
    /// Application client id
    pub client_id: String,
    /// Application client secret
    pub client_secret: String,
}

impl Credentials {
    /// Read credentials from `SPOTIFY_CLIENT_ID` / `SPOTIFY_CLIENT_SECRET`.
    pub fn from_env() -> Result<Self> {
        let client_id = std::env::var("SPOTIFY_CLIENT_ID");
        let client_secret = std::env::var("SPOTIFY_CLIENT_SECRET");
        match (client_id, client_secret) {
            (Ok(client_id), Ok(client_secret)) => Ok(Credentials {
                client_id,
                client_secret,
            }),
            _ => Err(Error::Configuration(
                "Missing Spotify credentials in environment variables. \
                 Set SPOTIFY_CLIENT_ID and SPOTIFY_CLIENT_SECRET."
                    .into(),
            )),
        }
    }
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: Option<String>,
}

/// Spotify Web API client for the two endpoints the export uses.
pub struct SpotifyClient {
    http: Client,
    credentials: Credentials,
    accounts_base: String,
    api_base: String,
}

impl SpotifyClient {
    /// Client against the real Spotify hosts.
    pub fn new(credentials: Credentials) -> Result<Self> {
        Self::with_endpoints(credentials, ACCOUNTS_BASE, API_BASE)
    }

    /// Client against alternative hosts. Tests point this at a mock server.
    pub fn with_endpoints(
        credentials: Credentials,
        accounts_base: impl Into<String>,
        api_base: impl Into<String>,
    ) -> Result<Self> {
        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(SpotifyClient {
            http,
            credentials,
            accounts_base: accounts_base.into(),
            api_base: api_base.into(),
        })
    }

    /// Create a `SpotifyClient` from environment variables or raise a
    /// configuration error.
    pub fn try_default() -> Result<Self> {
        Self::new(Credentials::from_env()?)
    }

    /// Exchange the client credentials for a fresh bearer token.
    ///
    /// Every invocation re-authenticates; tokens are never cached and expiry
    /// is never tracked.
    pub async fn fetch_token(&self) -> Result<AccessToken> {
        let response = self
            .http
            .post(format!("{}/api/token", self.accounts_base))
            .basic_auth(
                self.credentials.client_id.as_str(),
                Some(self.credentials.client_secret.as_str()),
            )
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Auth { status, body });
        }

        let token = response.json::<TokenResponse>().await?;
        let access_token = token.access_token.ok_or(Error::MissingAccessToken)?;
        debug!("Obtained access token from the accounts service");
        Ok(AccessToken::new(access_token))
    }

    /// Fetch the default page of a playlist's tracks in chart order.
    ///
    /// No pagination: whatever the API returns by default is the result set.
    pub async fn playlist_tracks(
        &self,
        token: &AccessToken,
        playlist_id: &str,
    ) -> Result<Vec<PlaylistItem>> {
        let response = self
            .http
            .get(format!(
                "{}/v1/playlists/{playlist_id}/tracks",
                self.api_base
            ))
            .bearer_auth(token.as_str())
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(Error::Fetch { status });
        }

        let page = response.json::<PlaylistTracksPage>().await?;
        debug!("Playlist endpoint returned {} items", page.items.len());
        Ok(page.items)
    }
}
