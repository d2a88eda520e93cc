//! Spark Core
//!
//! Configuration, logging and the [`AppHelpers`] bundle that installs the
//! permission store and SSO parameter groups for an application.

mod app;
mod config;
mod error;

pub use app::AppHelpers;
pub use config::{Config, PermissionConfig, SsoConfig};
pub use error::CoreError;

// Re-export helper crates
pub use spark_permission::{
    authorize, Permission, PermissionCodes, PermissionError, PermissionOperator,
};
pub use spark_sso::{
    parse_url, remove_url_search_params, resolve_url_search_params, GroupKey, Param, ParamGroup,
    ParamGroups, ParseUrlResult, RemoveParams, SearchParams,
};
pub use spark_tabs::{AsTab, TabError, TabRegistry, TabSide, TabsChange, TabsObserver, TabsOptions};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging. `RUST_LOG` wins over `default_filter`.
pub fn init_logging(default_filter: &str) {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    fmt().with_env_filter(filter).with_target(true).init();
}
