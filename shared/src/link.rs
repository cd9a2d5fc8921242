//! Storage link resolution
//!
//! The file store hands out `cloud://<env>.<bucket>/<path>` identifiers.
//! Clients need the public HTTPS form: `https://<bucket>.<domain>/<path>`.

/// Prefix marking a store-internal link
pub const CLOUD_SCHEME_MARKER: &str = "cloud";

/// Public domain the storage buckets are served from
pub const DEFAULT_DOMAIN_SUFFIX: &str = "tcb.qcloud.la";

/// Resolve a storage link against the default public domain
pub fn resolve_url(link: &str) -> String {
    resolve_url_with(link, DEFAULT_DOMAIN_SUFFIX)
}

/// Resolve a storage link against `domain_suffix`
///
/// Empty input yields an empty string. Links that are not store-internal,
/// or whose host segment has no bucket part, are returned unchanged.
pub fn resolve_url_with(link: &str, domain_suffix: &str) -> String {
    if link.is_empty() {
        return String::new();
    }
    if !link.starts_with(CLOUD_SCHEME_MARKER) {
        return link.to_string();
    }

    let mut segments: Vec<&str> = link.split('/').collect();
    let bucket = match segments.get(2).copied().and_then(|host| host.split('.').nth(1)) {
        Some(bucket) => bucket,
        None => {
            tracing::debug!(link = %link, "Storage link has no bucket segment, leaving as is");
            return link.to_string();
        }
    };

    let host = format!("{}.{}", bucket, domain_suffix);
    segments[0] = "https:";
    segments[2] = &host;
    segments.join("/")
}
