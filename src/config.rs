//! Runtime configuration.
//!
//! Settings come from a RON file (either given explicitly or found as
//! [DEFAULT_CONFIG_FILE] in the working directory), falling back to built-in
//! defaults.  The `CATALOG_URL` environment variable overrides the catalog
//! address.

use std::path::Path;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::error::Result;

pub const DEFAULT_CONFIG_FILE: &str = "team-analyzer.ron";
pub const CATALOG_URL_VAR: &str = "CATALOG_URL";

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct Config {
    /// Root of the catalog's REST API
    pub base_url: String,

    /// Per-request timeout, in seconds
    pub timeout_secs: u64,

    /// Number of entries random offsets are drawn from
    pub catalog_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: "https://pokeapi.co/api/v2".to_owned(),
            timeout_secs: 10,
            catalog_size: 893,
        }
    }
}

impl Config {
    pub fn from_ron(s: &str) -> Result<Self> {
        Ok(ron::from_str(s)?)
    }

    /// Loads the configuration from `path`, or from [DEFAULT_CONFIG_FILE] if
    /// no path is given and that file exists, then applies environment
    /// overrides
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(p) => {
                info!("Loading config from '{}'", p.display());
                Self::from_ron(&std::fs::read_to_string(p)?)?
            }
            None => match std::fs::read_to_string(DEFAULT_CONFIG_FILE) {
                Ok(d) => {
                    info!("Loading config from '{}'", DEFAULT_CONFIG_FILE);
                    Self::from_ron(&d)?
                }
                Err(_) => Self::default(),
            },
        };
        if let Ok(url) = std::env::var(CATALOG_URL_VAR) {
            debug!("Catalog URL overridden to {}", url);
            config.base_url = url;
        }
        config.base_url = config.base_url.trim_end_matches('/').to_owned();
        Ok(config)
    }
}
