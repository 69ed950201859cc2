//! Chartsnap - export the Spotify "Top 50 Global" chart to object storage
//!
//! A single invocation authenticates with a client-credentials grant, fetches
//! the playlist tracks, flattens each item into a ranked record, and uploads
//! the result as a dated CSV object.

/// Client modules for the Spotify API and object storage
pub mod clients;
/// Flattening of raw playlist items into ranked chart records
pub mod extract;
/// The export pipeline and its configuration
pub mod job;
/// CSV serialization and artifact upload
pub mod publish;
