//! Capability traits for an object store (list, download, upload) and their
//! Amazon S3 implementations.
//!
//! ```no_run
//! use cloudstor::context::Context;
//! use cloudstor::storage::{Downloader, S3Downloader, StorageConfig};
//!
//! # async fn demo() -> cloudstor::error::Result<()> {
//! let config = StorageConfig::new("us-east-1", "my-bucket");
//! let downloader = S3Downloader::new(&config).await?;
//! let data = downloader.download(&Context::background(), "path/to/object").await?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod context;
pub mod error;
pub mod storage;
