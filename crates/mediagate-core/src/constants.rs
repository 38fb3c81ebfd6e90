//! Proxy route constants shared by the converter and the API client.

/// Path segment that marks a URL as already routed through the backend proxy.
pub const PROXY_PATH_MARKER: &str = "/api/s3-proxy/";

/// Route serving an object by its storage key (`?key=`).
pub const DIRECT_KEY_PATH: &str = "/api/s3-proxy/direct-key";

/// Route issuing a short-lived signed URL (`?key=` for proxy URLs, `?url=` for fetches).
pub const SIGNED_URL_PATH: &str = "/api/s3-proxy/signed-url";

/// Route serving a contact card by filename (`/vcard/{filename}`).
pub const VCARD_PATH: &str = "/api/s3-proxy/vcard";

/// Path segment identifying contact card objects in the bucket.
pub const VCARDS_SEGMENT: &str = "/vcards/";

/// Record field whose subtree is rewritten with contact card rules.
pub const VCARD_FIELD: &str = "vcard";

/// Bucket name used when `STORAGE_CONTAINER_NAME` and `S3_BUCKET` are unset.
pub const DEFAULT_BUCKET_NAME: &str = "property-media";

/// Default timeout for signed URL requests, in seconds.
pub const DEFAULT_SIGNED_URL_TIMEOUT_SECS: u64 = 10;
