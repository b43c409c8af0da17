//! URL handling: host extraction and root-relative resolution.

use ::url::Url;

/// Host of an absolute URL, or `None` when `url` does not parse or has no
/// host. Domains come back lowercased.
pub fn host_of(url: &str) -> Option<String> {
    let parsed = Url::parse(url.trim()).ok()?;
    parsed.host_str().map(str::to_ascii_lowercase)
}

/// Resolve a tool URL against the page URL.
///
/// URLs starting with a single `/` are taken relative to the directory of
/// `base`, so a shell served under `/lab/` finds `/terminal/` at
/// `/lab/terminal/`. Anything else, or any URL when `base` does not parse,
/// is returned unchanged.
pub fn resolve_tool_url(url: &str, base: &str) -> String {
    let Some(rest) = url.strip_prefix('/') else {
        return url.to_string();
    };
    if rest.starts_with('/') {
        // Protocol-relative; leave it to the host
        return url.to_string();
    }
    match Url::parse(base).and_then(|base| base.join(&format!("./{rest}"))) {
        Ok(resolved) => resolved.to_string(),
        Err(_) => url.to_string(),
    }
}
