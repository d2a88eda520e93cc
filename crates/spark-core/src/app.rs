//! Application helper bundle
//!
//! Built once from a [`Config`] and handed to whatever needs permission
//! checks, SSO callback parsing or a tab registry.

use spark_permission::{Permission, PermissionCodes, PermissionOperator};
use spark_sso::{ParamGroups, ParseUrlResult};
use spark_tabs::{TabRegistry, TabsOptions};

use crate::config::Config;
use crate::Result;

#[derive(Debug, Clone)]
pub struct AppHelpers {
    permission: Permission,
    default_operator: PermissionOperator,
    param_groups: ParamGroups,
}

impl AppHelpers {
    pub fn new(config: Config) -> Self {
        let permission = Permission::with_codes(config.permission.codes);

        tracing::info!(
            codes = permission.codes().len(),
            operator = %config.permission.default_operator,
            "Installed app helpers"
        );

        Self {
            permission,
            default_operator: config.permission.default_operator,
            param_groups: config.sso.param_groups,
        }
    }

    /// The installed permission store
    pub fn permission(&self) -> &Permission {
        &self.permission
    }

    /// Guard an element with the configured default operator
    pub fn check(&self, value: impl Into<PermissionCodes>) -> Result<bool> {
        self.check_with(value, None)
    }

    /// Guard an element; `operator` falls back to the configured default
    pub fn check_with(
        &self,
        value: impl Into<PermissionCodes>,
        operator: Option<PermissionOperator>,
    ) -> Result<bool> {
        let operator = operator.unwrap_or(self.default_operator);
        Ok(spark_permission::authorize(
            Some(&self.permission),
            value,
            Some(operator),
        )?)
    }

    /// Match an SSO redirect URL against the configured groups
    pub fn parse_callback_url(&self, url: impl AsRef<str>) -> Option<ParseUrlResult> {
        spark_sso::parse_url(url, &self.param_groups)
    }

    pub fn create_tabs<T>(&self, options: TabsOptions<T>) -> TabRegistry<T>
    where
        T: Clone + Send + Sync + 'static,
    {
        TabRegistry::new(options)
    }
}

impl Default for AppHelpers {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
