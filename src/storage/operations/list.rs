use async_trait::async_trait;
use aws_sdk_s3::Client;
use snafu::ResultExt;
use tokio::sync::mpsc;

use crate::context::Context;
use crate::error::{ListObjectsSnafu, ListingSinkClosedSnafu, Result};
use crate::storage::{StorageConfig, build_client};

/// Trait for enumerating object keys in object storage.
#[async_trait]
pub trait Lister: Send + Sync {
    /// Send every key that starts with `prefix` to `sink`, page by page.
    ///
    /// # Arguments
    /// * `ctx` - Cancellation and deadline for the whole traversal
    /// * `prefix` - Key prefix to enumerate; empty lists the whole bucket
    /// * `sink` - Receives keys as they are discovered. Sends wait for
    ///   capacity, so a slow receiver slows the traversal down.
    ///
    /// The sink is dropped when this returns, which closes the channel.
    ///
    /// # Returns
    /// * `Result<()>` - `Canceled`/`DeadlineExceeded` untouched if the context
    ///   ended first, `ListObjects` for any provider failure
    async fn list_objects(
        &self,
        ctx: &Context,
        prefix: &str,
        sink: mpsc::Sender<String>,
    ) -> Result<()>;
}

/// Implementation of Lister backed by S3 ListObjectsV2.
pub struct S3Lister {
    client: Client,
    bucket: String,
}

impl S3Lister {
    /// Create a lister with its own client built from `config`.
    pub async fn new(config: &StorageConfig) -> Result<Self> {
        let client = build_client(config).await?;
        Ok(Self::from_client(client, config.bucket.clone()))
    }

    /// Create a lister around an existing client.
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
impl Lister for S3Lister {
    async fn list_objects(
        &self,
        ctx: &Context,
        prefix: &str,
        sink: mpsc::Sender<String>,
    ) -> Result<()> {
        log::debug!("list_objects bucket={} prefix={}", self.bucket, prefix);

        let mut pages = self
            .client
            .list_objects_v2()
            .bucket(&self.bucket)
            .prefix(prefix)
            .into_paginator()
            .send();

        let mut sent = 0usize;
        while let Some(page) = ctx.guard(pages.next()).await? {
            let page = page.context(ListObjectsSnafu { prefix })?;
            log::trace!(
                "list_objects bucket={} prefix={} page_keys={}",
                self.bucket,
                prefix,
                page.contents().len()
            );

            for key in page.contents().iter().filter_map(|object| object.key()) {
                ctx.guard(sink.send(key.to_string()))
                    .await?
                    .map_err(|_| ListingSinkClosedSnafu { prefix }.build())?;
                sent += 1;
            }
        }

        log::debug!(
            "list_objects bucket={} prefix={} keys={}",
            self.bucket,
            prefix,
            sent
        );
        Ok(())
    }
}
