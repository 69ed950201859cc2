use async_trait::async_trait;
use aws_sdk_s3::primitives::ByteStream;
use log::debug;

use crate::clients::errors::{Error, Result};

/// Opaque key-value blob store. The export only ever writes whole objects.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Store `bytes` under `key`, overwriting any existing object.
    async fn put(&self, key: &str, bytes: Vec<u8>) -> Result<()>;
}

/// S3-backed object store. Credentials, session token and region are
/// resolved from the standard `AWS_*` environment.
pub struct S3Store {
    client: aws_sdk_s3::Client,
    bucket: String,
}

impl S3Store {
    /// Store over an already-configured SDK client.
    pub fn new(client: aws_sdk_s3::Client, bucket: String) -> Self {
        S3Store { client, bucket }
    }

    /// Create an `S3Store` from environment variables or raise a
    /// configuration error. The bucket name comes from `S3_BUCKET`.
    pub async fn try_default() -> Result<Self> {
        let bucket = std::env::var("S3_BUCKET").map_err(|_| {
            Error::Configuration("Missing S3_BUCKET in environment variables.".into())
        })?;
        let sdk_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        let client = aws_sdk_s3::Client::new(&sdk_config);
        debug!("Opened S3 object store for bucket {bucket}");
        Ok(S3Store { client, bucket })
    }
}

#[async_trait]
impl ObjectStore for S3Store {
    async fn put(&self, key: &str, bytes: Vec<u8>) -> Result<()> {
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(ByteStream::from(bytes))
            .send()
            .await
            .map_err(|e| Error::Storage(e.to_string()))?;
        debug!("Stored object {key} in bucket {}", self.bucket);
        Ok(())
    }
}
