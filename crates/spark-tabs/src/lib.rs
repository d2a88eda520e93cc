//! Spark Tab Registry
//!
//! Ordered tab strip state for UI front-ends: which tabs are open, in which
//! order, which one is active, and how tabs are closed.
//! Closing goes through two gates:
//! - a removability policy (`is_removable`), e.g. pinned tabs stay
//! - an async confirmation hook (`before_remove`), e.g. "discard changes?"

mod error;
mod observer;
mod options;
mod registry;
mod side;

pub use error::TabError;
pub use observer::{TabsChange, TabsObserver};
pub use options::{BeforeRemove, IsRemovable, TabsOptions};
pub use registry::{AsTab, TabRegistry};
pub use side::TabSide;

pub type Result<T> = std::result::Result<T, TabError>;
