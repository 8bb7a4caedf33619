//! Client configuration.
//!
//! A single value: the base service URL. It is passed explicitly into
//! [`crate::AccountClient::new`] — there is no process-wide default state.
//! [`Config::from_env`] reads the `API_URL` environment variable as a
//! convenience, falling back to [`DEFAULT_BASE_URL`].

/// Base URL used when `API_URL` is not set.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Holder for the base service URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    base_url: String,
}

impl Config {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Read the base URL from the `API_URL` environment variable, falling
    /// back to [`DEFAULT_BASE_URL`].
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self { base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn set_base_url(&mut self, base_url: impl Into<String>) {
        self.base_url = base_url.into();
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
