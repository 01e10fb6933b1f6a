//! Deterministic URL construction from an endpoint path and ordered
//! query parameters.

/// Append `params` to `endpoint` as a percent-encoded query string.
///
/// Takes an ordered slice rather than a map so the output is byte-for-byte
/// stable: same pairs in the same order always yield the same URL.
pub fn build_url(endpoint: &str, params: &[(String, String)]) -> String {
    if params.is_empty() {
        return endpoint.to_string();
    }

    let query: Vec<String> = params
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect();

    format!("{}?{}", endpoint, query.join("&"))
}
