//! Permission error types

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PermissionError {
    #[error("Permission guard used before a permission instance was installed")]
    NotInstalled,

    #[error("Invalid permission operator: {0}")]
    InvalidOperator(String),
}
