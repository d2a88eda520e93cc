//! Element guard

use crate::error::PermissionError;
use crate::permissions::{Permission, PermissionCodes, PermissionOperator};
use crate::Result;

/// Decide whether a permission-guarded element stays mounted.
///
/// `permission` is the instance installed for the app, if any. Returns
/// `Ok(false)` when the element must be removed.
pub fn authorize(
    permission: Option<&Permission>,
    value: impl Into<PermissionCodes>,
    operator: Option<PermissionOperator>,
) -> Result<bool> {
    let permission = permission.ok_or(PermissionError::NotInstalled)?;
    let value = value.into();
    let operator = operator.unwrap_or_default();

    let allowed = permission.check(value.clone(), operator);
    if !allowed {
        tracing::debug!(codes = ?value.as_slice(), operator = %operator, "Permission denied, removing element");
    }

    Ok(allowed)
}
