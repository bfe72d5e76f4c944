use std::env;

use snafu::OptionExt;

use crate::error::{Error, InvalidConfigSnafu, MissingEnvVarSnafu, Result};
use crate::storage::StorageConfig;
use crate::storage::constants::{
    ENV_ACCESS_KEY_ID, ENV_ACCESS_KEY_SECRET, ENV_ACL, ENV_BUCKET, ENV_ENDPOINT,
    ENV_FORCE_PATH_STYLE, ENV_REGION, ENV_REGION_FALLBACKS, ENV_SESSION_TOKEN,
};

/// Load storage configuration from environment variables
pub fn load_storage_config() -> Result<StorageConfig> {
    load_storage_config_from(|key| env::var(key).ok())
}

/// Load storage configuration through an arbitrary variable lookup.
///
/// Blank values are treated as unset.
pub fn load_storage_config_from<F>(lookup: F) -> Result<StorageConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

    let bucket = get(ENV_BUCKET).context(MissingEnvVarSnafu { key: ENV_BUCKET })?;
    let region = std::iter::once(ENV_REGION)
        .chain(ENV_REGION_FALLBACKS.iter().copied())
        .find_map(|key| get(key))
        .context(MissingEnvVarSnafu { key: ENV_REGION })?;

    let mut config = StorageConfig::new(region, bucket);

    match (get(ENV_ACCESS_KEY_ID), get(ENV_ACCESS_KEY_SECRET)) {
        (Some(access_key_id), Some(access_key_secret)) => {
            config = config.with_static_credential(
                access_key_id,
                access_key_secret,
                get(ENV_SESSION_TOKEN),
            );
        }
        (None, None) => {}
        (Some(_), None) => {
            return Err(Error::MissingEnvVar {
                key: ENV_ACCESS_KEY_SECRET.to_string(),
            });
        }
        (None, Some(_)) => {
            return Err(Error::MissingEnvVar {
                key: ENV_ACCESS_KEY_ID.to_string(),
            });
        }
    }

    if let Some(acl) = get(ENV_ACL) {
        config = config.with_acl(acl);
    }
    if let Some(endpoint) = get(ENV_ENDPOINT) {
        config = config.with_endpoint(endpoint);
    }
    if let Some(flag) = get(ENV_FORCE_PATH_STYLE) {
        config = config.with_force_path_style(parse_bool(ENV_FORCE_PATH_STYLE, &flag)?);
    }

    Ok(config)
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => InvalidConfigSnafu {
            reason: format!("{key} must be a boolean, got '{value}'"),
        }
        .fail(),
    }
}
