use crate::clients::entities::{PlaylistItem, RawTrack, TrackRecord};
use crate::clients::errors::{Error, Result};

/// Flatten raw playlist items into chart records, assigning 1-based ranks in
/// input order.
///
/// The input order is the chart order, so a malformed item aborts the whole
/// batch instead of renumbering the survivors over a filtered subset.
pub fn extract(items: &[PlaylistItem]) -> Result<Vec<TrackRecord>> {
    let mut records = Vec::with_capacity(items.len());
    let mut rank: u32 = 0;
    for (index, item) in items.iter().enumerate() {
        let track = item.track.as_ref().ok_or_else(|| Error::MalformedRecord {
            index,
            reason: "item has no track object".into(),
        })?;
        rank += 1;
        records.push(to_record(track, index, rank)?);
    }
    Ok(records)
}

fn to_record(track: &RawTrack, index: usize, rank: u32) -> Result<TrackRecord> {
    let artist = track
        .artists
        .first()
        .ok_or_else(|| Error::MalformedRecord {
            index,
            reason: "track has an empty artist list".into(),
        })?;
    let url = track
        .external_urls
        .spotify
        .as_ref()
        .ok_or_else(|| Error::MalformedRecord {
            index,
            reason: "track has no canonical url".into(),
        })?;
    Ok(TrackRecord {
        rank,
        name: track.name.clone(),
        artist: artist.name.clone(),
        release_date: track.album.release_date.clone(),
        duration: format_duration(track.duration_ms),
        duration_ms: track.duration_ms,
        url: url.clone(),
    })
}

/// `"{minutes}m{seconds}s"`, floor division at both steps.
fn format_duration(duration_ms: u64) -> String {
    let minutes = duration_ms / 60_000;
    let seconds = (duration_ms % 60_000) / 1_000;
    format!("{minutes}m{seconds}s")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::entities::{ExternalUrls, RawAlbum, RawArtist};

    fn item(name: &str, artist: &str, duration_ms: u64) -> PlaylistItem {
        PlaylistItem {
            track: Some(RawTrack {
                name: name.to_string(),
                duration_ms,
                artists: vec![RawArtist {
                    name: artist.to_string(),
                }],
                album: RawAlbum {
                    release_date: "2024-01-01".to_string(),
                },
                external_urls: ExternalUrls {
                    spotify: Some(format!("https://open.spotify.com/track/{name}")),
                },
            }),
        }
    }

    #[test]
    fn ranks_are_contiguous_and_in_input_order() {
        let items: Vec<_> = (0..5)
            .map(|i| item(&format!("track-{i}"), "artist", 200_000))
            .collect();
        let records = extract(&items).unwrap();
        assert_eq!(records.len(), items.len());
        for (i, record) in records.iter().enumerate() {
            assert_eq!(record.rank as usize, i + 1);
            assert_eq!(record.name, format!("track-{i}"));
        }
    }

    #[test]
    fn duration_formatting() {
        assert_eq!(format_duration(125_000), "2m5s");
        assert_eq!(format_duration(59_999), "0m59s");
        assert_eq!(format_duration(0), "0m0s");
    }

    #[test]
    fn record_fields_are_flattened() {
        let records = extract(&[item("Song", "First Artist", 210_000)]).unwrap();
        let record = &records[0];
        assert_eq!(record.rank, 1);
        assert_eq!(record.artist, "First Artist");
        assert_eq!(record.release_date, "2024-01-01");
        assert_eq!(record.duration, "3m30s");
        assert_eq!(record.duration_ms, 210_000);
        assert_eq!(record.url, "https://open.spotify.com/track/Song");
    }

    #[test]
    fn only_first_artist_is_kept() {
        let mut entry = item("Song", "Lead", 100_000);
        entry
            .track
            .as_mut()
            .unwrap()
            .artists
            .push(RawArtist {
                name: "Feature".to_string(),
            });
        let records = extract(&[entry]).unwrap();
        assert_eq!(records[0].artist, "Lead");
    }

    #[test]
    fn empty_artist_list_aborts_the_batch() {
        let mut entry = item("Song", "Artist", 100_000);
        entry.track.as_mut().unwrap().artists.clear();
        let err = extract(&[item("Ok", "A", 1_000), entry]).unwrap_err();
        assert!(matches!(
            err,
            Error::MalformedRecord { index: 1, .. }
        ));
    }

    #[test]
    fn missing_track_object_aborts_the_batch() {
        let err = extract(&[PlaylistItem { track: None }]).unwrap_err();
        assert!(matches!(err, Error::MalformedRecord { index: 0, .. }));
    }

    #[test]
    fn missing_url_aborts_the_batch() {
        let mut entry = item("Song", "Artist", 100_000);
        entry.track.as_mut().unwrap().external_urls.spotify = None;
        let err = extract(&[entry]).unwrap_err();
        assert!(matches!(err, Error::MalformedRecord { index: 0, .. }));
    }
}
