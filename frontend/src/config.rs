/// Backend used when `GAMETRACKER_API` is not set at build time.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:4000/api";

/// Admin panel password used when `GAMETRACKER_ADMIN_SECRET` is not set.
/// Ships in the wasm bundle; it only hides the add-form.
pub const DEFAULT_ADMIN_SECRET: &str = "admin123";

pub struct Config;

impl Config {
    /// Base URL of the games REST service, read at compile time.
    pub fn api_base_url() -> String {
        normalize_base_url(option_env!("GAMETRACKER_API").unwrap_or(DEFAULT_API_BASE_URL))
    }

    pub fn admin_secret() -> &'static str {
        option_env!("GAMETRACKER_ADMIN_SECRET").unwrap_or(DEFAULT_ADMIN_SECRET)
    }
}

pub fn normalize_base_url(base: &str) -> String {
    base.trim().trim_end_matches('/').to_string()
}
