//! Helpers for the absolute and server-relative URLs the backend returns.

const SCHEMES: [&str; 2] = ["http://", "https://"];

/// Check whether `url` starts with a recognized scheme prefix.
pub fn is_absolute(url: &str) -> bool {
    SCHEMES.iter().any(|scheme| {
        url.get(..scheme.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
    })
}

/// Resolve `url` against `origin` unless it is already absolute.
pub fn absolutize(origin: &str, url: &str) -> String {
    if is_absolute(url) {
        return url.to_string();
    }

    let origin = origin.trim_end_matches('/');
    if url.starts_with('/') {
        format!("{origin}{url}")
    } else {
        format!("{origin}/{url}")
    }
}

/// Join a service base URL and an endpoint path.
pub fn join(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
