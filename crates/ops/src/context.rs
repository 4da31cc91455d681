//! Operations context for dependency injection

use buildsnag_config::{Config, BUILD_API_URL};
use buildsnag_errors::{Error, OpsError};
use buildsnag_net::NetClient;

/// Operations context providing access to the components a run needs
pub struct OpsCtx {
    /// Network client
    pub net: NetClient,
    /// Build API endpoint
    pub endpoint: String,
    /// Validate and simulate instead of calling the API
    pub check_mode: bool,
}

/// Builder for [`OpsCtx`]
pub struct OpsContextBuilder {
    net: Option<NetClient>,
    endpoint: Option<String>,
    check_mode: bool,
}

impl OpsContextBuilder {
    /// Create new context builder
    #[must_use]
    pub fn new() -> Self {
        Self {
            net: None,
            endpoint: None,
            check_mode: false,
        }
    }

    /// Set network client
    #[must_use]
    pub fn with_net(mut self, net: NetClient) -> Self {
        self.net = Some(net);
        self
    }

    /// Take the endpoint from loaded configuration
    #[must_use]
    pub fn with_config(mut self, config: &Config) -> Self {
        self.endpoint = Some(config.network.endpoint.clone());
        self
    }

    /// Override the build API endpoint
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Set check mode
    #[must_use]
    pub fn with_check_mode(mut self, check_mode: bool) -> Self {
        self.check_mode = check_mode;
        self
    }

    /// Build the context
    ///
    /// # Errors
    ///
    /// Returns an error if the network client is missing.
    pub fn build(self) -> Result<OpsCtx, Error> {
        let net = self.net.ok_or_else(|| OpsError::MissingComponent {
            component: "net".to_string(),
        })?;

        Ok(OpsCtx {
            net,
            endpoint: self.endpoint.unwrap_or_else(|| BUILD_API_URL.to_string()),
            check_mode: self.check_mode,
        })
    }
}

impl Default for OpsContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
