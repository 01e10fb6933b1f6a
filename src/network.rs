//! Target environments and their base URLs.

use serde::{Deserialize, Serialize};

/// Production REST API base URL.
pub const PRODUCTION_API_URL: &str = "https://api.xrpl.sale/v1";

/// Testnet REST API base URL.
pub const TESTNET_API_URL: &str = "https://api-testnet.xrpl.sale/v1";

/// Which XRPL.Sale deployment the client talks to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Production,
    Testnet,
}

impl Environment {
    /// Default base URL for this environment. An explicit
    /// `ClientConfig::base_url` override takes precedence.
    pub fn base_url(&self) -> &'static str {
        match self {
            Self::Production => PRODUCTION_API_URL,
            Self::Testnet => TESTNET_API_URL,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Production => "production",
            Self::Testnet => "testnet",
        }
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
