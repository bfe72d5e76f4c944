// Key helpers for mapping between local files and object keys

/// Join a key prefix and a file name with exactly one `/` between them.
pub fn build_remote_path(base: &str, file_name: &str) -> String {
    let file_name = file_name.trim_start_matches('/');
    if base.is_empty() {
        file_name.to_string()
    } else if base.ends_with('/') {
        format!("{base}{file_name}")
    } else {
        format!("{base}/{file_name}")
    }
}

/// Last segment of an object key, ignoring trailing slashes.
pub fn basename(path: &str) -> String {
    path.trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or_default()
        .to_string()
}
