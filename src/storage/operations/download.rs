use async_trait::async_trait;
use aws_sdk_s3::Client;
use snafu::ResultExt;

use crate::context::Context;
use crate::error::{DownloadObjectSnafu, ReadObjectBodySnafu, Result};
use crate::storage::{StorageConfig, build_client};

/// Trait for fetching whole objects from storage.
#[async_trait]
pub trait Downloader: Send + Sync {
    /// Read the full contents of the object at `path` into memory.
    ///
    /// Either the complete payload comes back or an error does; there are no
    /// partial results.
    async fn download(&self, ctx: &Context, path: &str) -> Result<Vec<u8>>;
}

/// Implementation of Downloader backed by S3 GetObject.
pub struct S3Downloader {
    client: Client,
    bucket: String,
}

impl S3Downloader {
    /// Create a downloader with its own client built from `config`.
    pub async fn new(config: &StorageConfig) -> Result<Self> {
        let client = build_client(config).await?;
        Ok(Self::from_client(client, config.bucket.clone()))
    }

    pub fn from_client(client: Client, bucket: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
        }
    }

    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    pub fn client(&self) -> &Client {
        &self.client
    }
}

#[async_trait]
impl Downloader for S3Downloader {
    async fn download(&self, ctx: &Context, path: &str) -> Result<Vec<u8>> {
        log::debug!("download bucket={} path={}", self.bucket, path);

        let output = ctx
            .guard(
                self.client
                    .get_object()
                    .bucket(&self.bucket)
                    .key(path)
                    .send(),
            )
            .await?
            .context(DownloadObjectSnafu { path })?;

        let body = ctx
            .guard(output.body.collect())
            .await?
            .context(ReadObjectBodySnafu { path })?;
        let data = body.to_vec();

        log::debug!(
            "download bucket={} path={} bytes={}",
            self.bucket,
            path,
            data.len()
        );
        Ok(data)
    }
}
