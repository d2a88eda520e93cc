//! Removal policy
//!
//! `is_removable` decides whether a tab may ever be closed (pinned tabs,
//! home tabs). `before_remove` runs right before a close and may ask the
//! user; resolving to `Ok(false)` or any `Err` keeps the tab.

use futures_util::future::{self, BoxFuture, FutureExt};
use std::future::Future;
use std::sync::Arc;

use crate::Result;

pub type IsRemovable<T> = Arc<dyn Fn(&str, &T) -> bool + Send + Sync>;

pub type BeforeRemove<T> = Arc<dyn Fn(&str, &T) -> BoxFuture<'static, Result<bool>> + Send + Sync>;

pub struct TabsOptions<T> {
    pub(crate) is_removable: IsRemovable<T>,
    pub(crate) before_remove: BeforeRemove<T>,
}

impl<T> TabsOptions<T> {
    pub fn new() -> Self {
        Self {
            is_removable: Arc::new(|_, _| true),
            before_remove: Arc::new(|_, _| future::ready(Ok(true)).boxed()),
        }
    }

    /// Tabs for which `f` returns false are never removed.
    ///
    /// ```
    /// # use spark_tabs::TabsOptions;
    /// struct Page { pinned: bool }
    ///
    /// let options = TabsOptions::<Page>::new().is_removable(|_, page| !page.pinned);
    /// ```
    pub fn is_removable<F>(mut self, f: F) -> Self
    where
        F: Fn(&str, &T) -> bool + Send + Sync + 'static,
    {
        self.is_removable = Arc::new(f);
        self
    }

    /// Asynchronous confirmation run before each removal.
    ///
    /// The hook receives borrowed arguments and must return an owned future,
    /// so clone whatever the confirmation needs before the `async move`.
    pub fn before_remove<F, Fut>(mut self, f: F) -> Self
    where
        F: Fn(&str, &T) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<bool>> + Send + 'static,
    {
        self.before_remove = Arc::new(move |tab, data| f(tab, data).boxed());
        self
    }

    /// Synchronous variant of [`TabsOptions::before_remove`].
    pub fn before_remove_sync<F>(mut self, f: F) -> Self
    where
        F: Fn(&str, &T) -> bool + Send + Sync + 'static,
    {
        self.before_remove = Arc::new(move |tab, data| future::ready(Ok(f(tab, data))).boxed());
        self
    }

    pub(crate) fn check_removable(&self, tab: &str, data: &T) -> bool {
        (self.is_removable)(tab, data)
    }

    pub(crate) fn confirm_remove(&self, tab: &str, data: &T) -> BoxFuture<'static, Result<bool>> {
        (self.before_remove)(tab, data)
    }
}

impl<T> Default for TabsOptions<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for TabsOptions<T> {
    fn clone(&self) -> Self {
        Self {
            is_removable: Arc::clone(&self.is_removable),
            before_remove: Arc::clone(&self.before_remove),
        }
    }
}

impl<T> std::fmt::Debug for TabsOptions<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TabsOptions").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TabError;

    #[tokio::test]
    async fn test_defaults_allow_everything() {
        let options = TabsOptions::<u32>::default();
        assert!(options.check_removable("tab", &1));
        assert!(options.confirm_remove("tab", &1).await.unwrap());
    }

    #[tokio::test]
    async fn test_custom_hooks() {
        let options = TabsOptions::<bool>::new()
            .is_removable(|_, fixed| !*fixed)
            .before_remove(|tab, _| {
                let tab = tab.to_string();
                async move { Err::<bool, _>(TabError::Cancelled(tab)) }
            });

        assert!(!options.check_removable("home", &true));
        assert!(options.check_removable("page", &false));
        assert!(matches!(
            options.confirm_remove("page", &false).await,
            Err(TabError::Cancelled(tab)) if tab == "page"
        ));
    }

    #[tokio::test]
    async fn test_sync_confirmation() {
        let options = TabsOptions::<()>::new().before_remove_sync(|tab, _| tab != "draft");
        assert!(options.confirm_remove("page", &()).await.unwrap());
        assert!(!options.confirm_remove("draft", &()).await.unwrap());
    }
}
