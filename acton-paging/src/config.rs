//! Configuration management using Figment
//!
//! Paging defaults live under a `[paging]` table. Sources are layered with the
//! following precedence (highest to lowest):
//! 1. Environment variables (prefix: ACTON_PAGING_, e.g. `ACTON_PAGING_MAX_SIZE=100`)
//! 2. Config file: ./config.toml, or the path given to [`PagingConfig::load_from`]
//! 3. Default values
//!
//! ```toml
//! [paging]
//! default_page = 0
//! default_size = 25
//! max_size = 100
//! ```

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Error, Result};
use crate::paging::{PagingRequest, DEFAULT_PAGE, DEFAULT_PAGE_SIZE};

/// Table holding the paging settings
const SECTION: &str = "paging";

/// Environment variable prefix
const ENV_PREFIX: &str = "ACTON_PAGING_";

/// Paging defaults and limits
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PagingConfig {
    /// Page number used when the request has none or an unusable one
    #[serde(default = "default_page")]
    pub default_page: u32,

    /// Page size used when the request has none or an unusable one
    #[serde(default = "default_size")]
    pub default_size: u32,

    /// Upper bound for requested page sizes (no bound when unset)
    #[serde(default)]
    pub max_size: Option<u32>,
}

fn default_page() -> u32 {
    DEFAULT_PAGE
}

fn default_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

impl Default for PagingConfig {
    fn default() -> Self {
        Self {
            default_page: default_page(),
            default_size: default_size(),
            max_size: None,
        }
    }
}

impl PagingConfig {
    /// Load configuration from ./config.toml (if present) and the environment
    pub fn load() -> Result<Self> {
        Self::load_from("config.toml")
    }

    /// Load configuration from a specific file
    ///
    /// A missing file is not an error; defaults and environment still apply.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let mut figment = Figment::new()
            // Start with defaults
            .merge(Serialized::default(SECTION, Self::default()));

        if path.exists() {
            tracing::info!("Loading configuration from: {}", path.display());
            figment = figment.merge(Toml::file(path));
        } else {
            tracing::debug!("No configuration file at {}, using defaults", path.display());
        }

        // Environment variables have highest priority
        figment = figment.merge(
            Env::prefixed(ENV_PREFIX).map(|key| format!("{SECTION}.{key}").into()),
        );

        Self::from_figment(&figment)
    }

    /// Extract and validate the `[paging]` table from a prepared figment
    pub fn from_figment(figment: &Figment) -> Result<Self> {
        let config: Self = figment.extract_inner(SECTION)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that defaults and limits are consistent
    pub fn validate(&self) -> Result<()> {
        if self.default_size == 0 {
            return Err(Error::invalid_argument("default_size must be at least 1"));
        }
        match self.max_size {
            Some(0) => Err(Error::invalid_argument("max_size must be at least 1")),
            Some(max) if self.default_size > max => Err(Error::invalid_argument(format!(
                "default_size ({}) exceeds max_size ({max})",
                self.default_size
            ))),
            _ => Ok(()),
        }
    }

    /// The configured fallback request
    pub fn defaults(&self) -> Result<PagingRequest> {
        PagingRequest::try_new(self.default_page, self.default_size)
    }
}
