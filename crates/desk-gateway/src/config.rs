//! Gateway configuration
//!
//! All configuration comes from environment variables, read once at startup.
//! There is no reload mechanism and no configuration file.

use anyhow::{Context, Result};

fn default_listen_addr() -> String {
    "127.0.0.1:5000".to_string()
}

/// Gateway configuration
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Listen address for the HTTP server
    pub listen_addr: String,

    /// Breeze app key
    pub breeze_api_key: String,

    /// Breeze app secret
    pub breeze_api_secret: String,

    /// Generative Language API key
    pub genai_api_key: String,

    /// Optional model override for the analysis route
    pub genai_model: Option<String>,
}

impl GatewayConfig {
    /// Load configuration from environment variables
    ///
    /// `BREEZE_API_KEY`, `BREEZE_API_SECRET`, and `API_KEY` are required;
    /// `MARKETDESK_ADDR` and `GENAI_MODEL` are optional.
    pub fn from_env() -> Result<Self> {
        let listen_addr =
            std::env::var("MARKETDESK_ADDR").unwrap_or_else(|_| default_listen_addr());

        let breeze_api_key = std::env::var("BREEZE_API_KEY")
            .context("BREEZE_API_KEY environment variable not set")?;
        let breeze_api_secret = std::env::var("BREEZE_API_SECRET")
            .context("BREEZE_API_SECRET environment variable not set")?;
        let genai_api_key =
            std::env::var("API_KEY").context("API_KEY environment variable not set")?;

        let genai_model = std::env::var("GENAI_MODEL").ok();

        Ok(Self {
            listen_addr,
            breeze_api_key,
            breeze_api_secret,
            genai_api_key,
            genai_model,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clear_env() {
        // SAFETY: test-only env mutation
        unsafe {
            std::env::remove_var("MARKETDESK_ADDR");
            std::env::remove_var("BREEZE_API_KEY");
            std::env::remove_var("BREEZE_API_SECRET");
            std::env::remove_var("API_KEY");
            std::env::remove_var("GENAI_MODEL");
        }
    }

    // Single test: the process environment is shared across test threads.
    #[test]
    fn test_from_env() {
        clear_env();
        assert!(GatewayConfig::from_env().is_err());

        // SAFETY: test-only env mutation
        unsafe {
            std::env::set_var("BREEZE_API_KEY", "bk");
            std::env::set_var("BREEZE_API_SECRET", "bs");
            std::env::set_var("API_KEY", "gk");
        }

        let config = GatewayConfig::from_env().unwrap();
        assert_eq!(config.listen_addr, "127.0.0.1:5000");
        assert_eq!(config.breeze_api_key, "bk");
        assert_eq!(config.genai_model, None);

        clear_env();
    }
}
