//! Spark Permissions
//!
//! Granted permission codes (`"list:add"`, `"list:delete"`, ...) and the
//! checks used to show or hide UI elements:
//! - `and`: every listed code must be granted
//! - `or`: any listed code is enough
//!
//! [`authorize`] is the element guard. It fails when no [`Permission`] was
//! installed, and a `false` outcome means the guarded element is dropped.

mod error;
mod guard;
mod permissions;

pub use error::PermissionError;
pub use guard::authorize;
pub use permissions::{Permission, PermissionCodes, PermissionOperator};

pub type Result<T> = std::result::Result<T, PermissionError>;
