use axum::extract::DefaultBodyLimit;

/// Cap request bodies at `max_bytes`. Oversized bodies surface as a
/// `JsonRejection` with status 413, so they get the usual JSON error body.
pub fn body_limit_layer(max_bytes: usize) -> DefaultBodyLimit {
    DefaultBodyLimit::max(max_bytes)
}
