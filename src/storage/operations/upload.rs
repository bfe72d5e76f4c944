use async_trait::async_trait;
use aws_sdk_s3::Client;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::types::ObjectCannedAcl;
use snafu::ResultExt;

use crate::context::Context;
use crate::error::{Result, UploadObjectSnafu};
use crate::storage::{StorageConfig, build_client};

/// Trait for writing whole objects to storage.
#[async_trait]
pub trait Uploader: Send + Sync {
    /// Write `payload` to the object at `path`, replacing any existing object.
    ///
    /// # Arguments
    /// * `ctx` - Cancellation and deadline for the request
    /// * `path` - Destination key
    /// * `payload` - Complete object contents; borrowed for the duration of the call
    async fn upload_buffer(&self, ctx: &Context, path: &str, payload: &[u8]) -> Result<()>;
}

/// Implementation of Uploader backed by S3 PutObject.
pub struct S3Uploader {
    client: Client,
    bucket: String,
    acl: Option<ObjectCannedAcl>,
}

impl S3Uploader {
    /// Create an uploader with its own client built from `config`.
    pub async fn new(config: &StorageConfig) -> Result<Self> {
        let client = build_client(config).await?;
        Ok(Self::from_client(
            client,
            config.bucket.clone(),
            config.acl.as_deref(),
        ))
    }

    /// Create an uploader around an existing client. A blank `acl` sends no
    /// ACL header, leaving the bucket's default in effect.
    pub fn from_client(client: Client, bucket: impl Into<String>, acl: Option<&str>) -> Self {
        let acl = acl
            .map(str::trim)
            .filter(|acl| !acl.is_empty())
            .map(ObjectCannedAcl::from);
        Self {
            client,
            bucket: bucket.into(),
            acl,
        }
    }

    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    pub fn acl(&self) -> Option<&ObjectCannedAcl> {
        self.acl.as_ref()
    }
}

#[async_trait]
impl Uploader for S3Uploader {
    async fn upload_buffer(&self, ctx: &Context, path: &str, payload: &[u8]) -> Result<()> {
        log::debug!(
            "upload_buffer bucket={} path={} bytes={} acl={:?}",
            self.bucket,
            path,
            payload.len(),
            self.acl.as_ref().map(|acl| acl.as_str())
        );

        ctx.guard(
            self.client
                .put_object()
                .bucket(&self.bucket)
                .key(path)
                .set_acl(self.acl.clone())
                .body(ByteStream::from(payload.to_vec()))
                .send(),
        )
        .await?
        .context(UploadObjectSnafu { path })?;

        Ok(())
    }
}
