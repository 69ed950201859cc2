use chrono::NaiveDate;
use log::{debug, error};

use crate::clients::entities::TrackRecord;
use crate::clients::errors::{Error, Result};
use crate::clients::storage::ObjectStore;

/// Object key for an invocation date: `{YYYY-MM-DD}.csv`.
///
/// Re-running on the same calendar date overwrites the previous artifact.
#[must_use]
pub fn artifact_key(date: NaiveDate) -> String {
    format!("{}.csv", date.format("%Y-%m-%d"))
}

/// Serialize `records` as CSV with a header row in record field order.
pub fn to_csv(records: &[TrackRecord]) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for record in records {
        writer.serialize(record)?;
    }
    writer
        .into_inner()
        .map_err(|e| Error::Csv(csv::Error::from(e.into_error())))
}

/// Serialize `records` and write the artifact to `store` under `key`.
///
/// The CSV is built entirely in memory, so there is no scratch file to clean
/// up on any exit path. Failures are logged here and surfaced as a
/// [`Error::Publish`] value rather than a crash; the caller decides whether
/// that aborts the job.
pub async fn publish(store: &dyn ObjectStore, key: &str, records: &[TrackRecord]) -> Result<()> {
    let result = async {
        let bytes = to_csv(records)?;
        debug!("Serialized {} records into {} bytes", records.len(), bytes.len());
        store.put(key, bytes).await
    }
    .await;

    result.map_err(|e| {
        error!("Failed to publish artifact {key}: {e}");
        Error::Publish {
            key: key.to_string(),
            reason: e.to_string(),
        }
    })
}
