#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Network operations for buildsnag
//!
//! This crate owns the single HTTP exchange with the build API: one JSON
//! POST, no retries.

mod client;

pub use client::{ApiResponse, NetClient, NetConfig};

use buildsnag_errors::{Error, NetworkError};
use url::Url;

/// Parse and validate a URL
///
/// # Errors
///
/// Returns an error if the URL string is malformed or invalid according to RFC 3986.
pub fn parse_url(url: &str) -> Result<Url, Error> {
    Url::parse(url).map_err(|e| NetworkError::InvalidUrl(e.to_string()).into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_url() {
        assert!(parse_url("https://build.bugsnag.com/").is_ok());
        assert!(parse_url("not a url").is_err());
    }

    #[test]
    fn test_default_user_agent() {
        let config = NetConfig::default();
        assert!(config.user_agent.starts_with("buildsnag/"));
    }

    #[test]
    fn test_timeouts_from_network_config() {
        let network = buildsnag_config::NetworkConfig {
            timeout: 7,
            connect_timeout: 2,
            ..Default::default()
        };
        let client = NetClient::new(NetConfig::from(&network)).unwrap();
        assert_eq!(client.config().timeout.as_secs(), 7);
        assert_eq!(client.config().connect_timeout.as_secs(), 2);
    }
}
