// Storage capability traits and their S3 implementations
pub mod download;
pub mod list;
pub mod upload;

use async_trait::async_trait;
use tokio::sync::mpsc;

pub use download::{Downloader, S3Downloader};
pub use list::{Lister, S3Lister};
pub use upload::{S3Uploader, Uploader};

use crate::context::Context;
use crate::error::Result;
use crate::storage::StorageConfig;

/// Anything that can both list and download.
pub trait ListDownloader: Lister + Downloader {}

impl<T: Lister + Downloader + ?Sized> ListDownloader for T {}

/// A lister and a downloader built side by side from the same configuration.
///
/// Each half owns its own client; nothing is shared between them.
pub struct S3ListDownloader {
    downloader: S3Downloader,
    lister: S3Lister,
}

impl S3ListDownloader {
    pub async fn new(config: &StorageConfig) -> Result<Self> {
        Ok(Self {
            downloader: S3Downloader::new(config).await?,
            lister: S3Lister::new(config).await?,
        })
    }

    pub fn from_parts(downloader: S3Downloader, lister: S3Lister) -> Self {
        Self { downloader, lister }
    }
}

#[async_trait]
impl Lister for S3ListDownloader {
    async fn list_objects(
        &self,
        ctx: &Context,
        prefix: &str,
        sink: mpsc::Sender<String>,
    ) -> Result<()> {
        self.lister.list_objects(ctx, prefix, sink).await
    }
}

#[async_trait]
impl Downloader for S3ListDownloader {
    async fn download(&self, ctx: &Context, path: &str) -> Result<Vec<u8>> {
        self.downloader.download(ctx, path).await
    }
}
