// Provider name attached to credentials built from explicit keys
pub const STATIC_CREDENTIAL_PROVIDER: &str = "cloudstor-static";

// Channel capacity used by the CLI when streaming listed keys
pub const LIST_CHANNEL_CAPACITY: usize = 1024;

// Environment variables read by `config::load_storage_config`
pub const ENV_BUCKET: &str = "STORAGE_BUCKET";
pub const ENV_REGION: &str = "STORAGE_REGION";
pub const ENV_REGION_FALLBACKS: &[&str] = &["AWS_REGION", "AWS_DEFAULT_REGION"];
pub const ENV_ACCESS_KEY_ID: &str = "STORAGE_ACCESS_KEY_ID";
pub const ENV_ACCESS_KEY_SECRET: &str = "STORAGE_ACCESS_KEY_SECRET";
pub const ENV_SESSION_TOKEN: &str = "STORAGE_SESSION_TOKEN";
pub const ENV_ACL: &str = "STORAGE_ACL";
pub const ENV_ENDPOINT: &str = "STORAGE_ENDPOINT";
pub const ENV_FORCE_PATH_STYLE: &str = "STORAGE_FORCE_PATH_STYLE";
