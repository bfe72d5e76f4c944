use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{Parser, Subcommand};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio::sync::mpsc;

use crate::context::Context;
use crate::error::Result;
use crate::storage::constants::LIST_CHANNEL_CAPACITY;
use crate::storage::{
    Downloader, Lister, S3Downloader, S3Lister, S3Uploader, StorageConfig, Uploader, basename,
    build_remote_path, format_size,
};

/// List, download and upload objects in an S3 bucket.
///
/// Connection settings come from STORAGE_* environment variables.
#[derive(Debug, Parser)]
#[command(name = "cloudstor", version)]
pub struct Args {
    /// Abort the operation after this many seconds
    #[arg(long, global = true, value_name = "SECONDS", env = "STORAGE_TIMEOUT")]
    pub timeout: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print every object key under a prefix
    Ls {
        /// Key prefix; empty lists the whole bucket
        #[arg(default_value = "")]
        prefix: String,
    },
    /// Download an object into a local file
    Get {
        /// Object key
        path: String,
        /// Destination file, defaults to the key's basename; '-' writes to stdout
        local: Option<PathBuf>,
    },
    /// Upload a local file as an object
    Put {
        /// Source file
        local: PathBuf,
        /// Object key; a trailing '/' appends the local file name
        path: String,
    },
}

pub async fn run(args: Args, config: StorageConfig) -> Result<()> {
    let root = Context::background();
    let ctx = match args.timeout {
        Some(seconds) => root.with_timeout(Duration::from_secs(seconds)),
        None => root.with_cancel(),
    };

    let interrupt = ctx.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            log::debug!("interrupt received, cancelling");
            interrupt.cancel();
        }
    });

    match args.command {
        Command::Ls { prefix } => {
            let lister = S3Lister::new(&config).await?;
            list(&lister, &ctx, &prefix).await
        }
        Command::Get { path, local } => {
            let downloader = S3Downloader::new(&config).await?;
            get(&downloader, &ctx, &path, local).await
        }
        Command::Put { local, path } => {
            let uploader = S3Uploader::new(&config).await?;
            put(&uploader, &ctx, &local, &path).await
        }
    }
}

async fn list(lister: &dyn Lister, ctx: &Context, prefix: &str) -> Result<()> {
    let (tx, mut rx) = mpsc::channel(LIST_CHANNEL_CAPACITY);
    let (result, ()) = tokio::join!(lister.list_objects(ctx, prefix, tx), async {
        while let Some(key) = rx.recv().await {
            println!("{key}");
        }
    });
    result
}

async fn get(
    downloader: &dyn Downloader,
    ctx: &Context,
    path: &str,
    local: Option<PathBuf>,
) -> Result<()> {
    let data = downloader.download(ctx, path).await?;

    let local = local.unwrap_or_else(|| PathBuf::from(basename(path)));
    if local.as_os_str() == "-" {
        let mut stdout = tokio::io::stdout();
        stdout.write_all(&data).await?;
        stdout.flush().await?;
        return Ok(());
    }

    if let Some(parent) = local.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).await?;
    }
    fs::write(&local, &data).await?;
    println!(
        "Downloaded: {path} → {} ({})",
        local.display(),
        format_size(data.len() as u64)
    );
    Ok(())
}

async fn put(uploader: &dyn Uploader, ctx: &Context, local: &Path, path: &str) -> Result<()> {
    let payload = fs::read(local).await?;

    let remote = if path.ends_with('/') || path.is_empty() {
        let file_name = local
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_default();
        build_remote_path(path, &file_name)
    } else {
        path.to_string()
    };

    uploader.upload_buffer(ctx, &remote, &payload).await?;
    println!(
        "Uploaded: {} → {remote} ({})",
        local.display(),
        format_size(payload.len() as u64)
    );
    Ok(())
}
