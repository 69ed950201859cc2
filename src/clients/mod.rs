/// Raw API payloads and the flat output record
pub mod entities;
/// Error types and result aliases
pub mod errors;
/// Spotify Web API client
pub mod spotify;
/// Object storage client
pub mod storage;

pub use spotify::SpotifyClient;
pub use storage::{ObjectStore, S3Store};
