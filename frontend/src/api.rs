pub mod games;

/// Joins the API base URL and an endpoint path.
pub fn join_url(base_url: &str, path: &str) -> String {
    if base_url.is_empty() {
        // Use relative URL
        path.to_string()
    } else {
        format!("{}{}", base_url, path)
    }
}
