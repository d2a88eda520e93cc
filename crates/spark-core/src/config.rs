//! Helper configuration
//!
//! ```json
//! {
//!   "log_filter": "spark_tabs=debug,info",
//!   "permission": { "default_operator": "or", "codes": ["list:add"] },
//!   "sso": { "param_groups": ["access_token"] }
//! }
//! ```
//! Every field is optional.

use serde::{Deserialize, Serialize};
use std::path::Path;

use spark_permission::PermissionOperator;
use spark_sso::ParamGroups;

use crate::error::CoreError;
use crate::Result;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Tracing filter used when `RUST_LOG` is unset
    pub log_filter: String,
    pub permission: PermissionConfig,
    pub sso: SsoConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PermissionConfig {
    /// Operator for checks that do not name one
    pub default_operator: PermissionOperator,
    /// Codes granted at startup
    pub codes: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SsoConfig {
    /// Groups matched against callback URLs
    pub param_groups: ParamGroups,
}

impl Config {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), "Loading helper configuration");
        Self::from_json_str(&json)
    }

    fn validate(&self) -> Result<()> {
        if self.log_filter.trim().is_empty() {
            return Err(CoreError::Config("log_filter cannot be empty".to_string()));
        }

        let groups = self.sso.param_groups.clone().normalize();
        if groups
            .iter()
            .flat_map(|g| &g.params)
            .any(|p| p.name.is_empty())
        {
            return Err(CoreError::Config(
                "SSO parameter names cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: "info".to_string(),
            permission: PermissionConfig::default(),
            sso: SsoConfig::default(),
        }
    }
}
