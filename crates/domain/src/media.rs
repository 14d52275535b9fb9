//! Media URL resolution.

/// Resolves a media path returned by the API against the API base URL.
///
/// Absolute `http(s)` URLs are returned unchanged; relative paths are joined
/// to the base without doubling the slash.
#[must_use]
pub fn media_url(base_url: &str, path: Option<&str>) -> Option<String> {
    let path = path.filter(|p| !p.is_empty())?;
    if path.starts_with("http") {
        return Some(path.to_string());
    }

    let base = base_url.trim_end_matches('/');
    if path.starts_with('/') {
        Some(format!("{base}{path}"))
    } else {
        Some(format!("{base}/{path}"))
    }
}
