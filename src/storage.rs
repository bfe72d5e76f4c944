use aws_config::{BehaviorVersion, Region};
use aws_credential_types::Credentials;
use aws_credential_types::provider::SharedCredentialsProvider;
use aws_sdk_s3::Client;
use snafu::ensure;

use crate::error::{InvalidConfigSnafu, Result};

pub mod constants;
mod operations;
mod utils;

pub use self::operations::{
    Downloader, ListDownloader, Lister, S3Downloader, S3ListDownloader, S3Lister, S3Uploader,
    Uploader,
};
pub use self::utils::path::{basename, build_remote_path};
pub use self::utils::size::format_size;

/// Connection settings shared by every S3 adapter.
///
/// Adapters copy what they need out of the config at construction time and
/// never hold on to it.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Explicit credential. `None` defers to the SDK's default provider chain.
    pub credential: Option<SharedCredentialsProvider>,
    pub region: String,
    pub bucket: String,
    /// Canned ACL applied to uploads, e.g. `private` or `bucket-owner-full-control`.
    pub acl: Option<String>,
    pub endpoint: Option<String>,
    pub force_path_style: bool,
}

impl StorageConfig {
    pub fn new(region: impl Into<String>, bucket: impl Into<String>) -> Self {
        Self {
            credential: None,
            region: region.into(),
            bucket: bucket.into(),
            acl: None,
            endpoint: None,
            force_path_style: false,
        }
    }

    pub fn with_credential(mut self, credential: SharedCredentialsProvider) -> Self {
        self.credential = Some(credential);
        self
    }

    pub fn with_static_credential(
        self,
        access_key_id: impl Into<String>,
        secret_access_key: impl Into<String>,
        session_token: Option<String>,
    ) -> Self {
        let credentials = Credentials::new(
            access_key_id,
            secret_access_key,
            session_token,
            None,
            constants::STATIC_CREDENTIAL_PROVIDER,
        );
        self.with_credential(SharedCredentialsProvider::new(credentials))
    }

    pub fn with_acl(mut self, acl: impl Into<String>) -> Self {
        self.acl = Some(acl.into());
        self
    }

    /// Point the client at an S3-compatible endpoint. Also turns on path-style
    /// addressing; call `with_force_path_style(false)` afterwards to undo.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self.force_path_style = true;
        self
    }

    pub fn with_force_path_style(mut self, force_path_style: bool) -> Self {
        self.force_path_style = force_path_style;
        self
    }

    fn validate(&self) -> Result<()> {
        ensure!(
            !self.bucket.trim().is_empty(),
            InvalidConfigSnafu {
                reason: "bucket must not be empty"
            }
        );
        ensure!(
            !self.region.trim().is_empty(),
            InvalidConfigSnafu {
                reason: "region must not be empty"
            }
        );
        Ok(())
    }
}

/// Build a fresh S3 client for one adapter.
pub(crate) async fn build_client(config: &StorageConfig) -> Result<Client> {
    config.validate()?;

    let mut loader =
        aws_config::defaults(BehaviorVersion::latest()).region(Region::new(config.region.clone()));
    match &config.credential {
        Some(credential) => {
            log::debug!(
                "build_client bucket={} region={} credential=explicit",
                config.bucket,
                config.region
            );
            loader = loader.credentials_provider(credential.clone());
        }
        None => {
            log::debug!(
                "build_client bucket={} region={} credential=default-chain",
                config.bucket,
                config.region
            );
        }
    }
    let sdk_config = loader.load().await;

    let mut builder =
        aws_sdk_s3::config::Builder::from(&sdk_config).force_path_style(config.force_path_style);
    if let Some(endpoint) = &config.endpoint {
        builder = builder.endpoint_url(endpoint);
    }
    Ok(Client::from_conf(builder.build()))
}
