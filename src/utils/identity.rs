use crate::models::host::HostContainer;
use percent_encoding::percent_decode_str;

/// Resolves the current user, preferring an explicit `user_id` query
/// parameter over the host container's identity. Re-derived from ambient
/// state on every call; nothing is cached.
pub fn resolve_user_id(query: &str, host: Option<&dyn HostContainer>) -> Option<i64> {
    if let Some(raw) = query_param(query, "user_id") {
        // A present but malformed value resolves to nothing; the host
        // identity is not consulted once the parameter exists.
        return raw.parse::<i64>().ok();
    }

    host.and_then(|host| host.user_id())
}

/// First non-empty value for `name` in a raw query string. A key with no
/// value counts as absent.
fn query_param(query: &str, name: &str) -> Option<String> {
    for pair in query.split('&') {
        let (key, value) = match pair.split_once('=') {
            Some(kv) => kv,
            None => continue,
        };

        if key == name && !value.is_empty() {
            return percent_decode_str(value)
                .decode_utf8()
                .ok()
                .map(|value| value.into_owned());
        }
    }

    None
}
