//! Tab Registry
//!
//! Holds the ordered tabs of a tab strip, the active tab, and coordinates
//! closing tabs through the removal policy.

use parking_lot::RwLock;
use std::sync::Arc;

use crate::error::TabError;
use crate::observer::{TabsChange, TabsObserver};
use crate::options::TabsOptions;
use crate::side::TabSide;

/// Anything that names a tab: an identifier or a `(tab, data)` pair as
/// returned by [`TabRegistry::get_tabs`].
pub trait AsTab {
    fn as_tab(&self) -> &str;
}

impl AsTab for str {
    fn as_tab(&self) -> &str {
        self
    }
}

impl AsTab for String {
    fn as_tab(&self) -> &str {
        self
    }
}

impl<T> AsTab for (String, T) {
    fn as_tab(&self) -> &str {
        &self.0
    }
}

impl<K: AsTab + ?Sized> AsTab for &K {
    fn as_tab(&self) -> &str {
        (**self).as_tab()
    }
}

struct TabsState<T> {
    /// Insertion ordered, keys unique
    tabs: Vec<(String, T)>,
    active_tab: Option<String>,
}

impl<T> TabsState<T> {
    fn index_of(&self, tab: &str) -> Option<usize> {
        self.tabs.iter().position(|(t, _)| t == tab)
    }
}

pub struct TabRegistry<T> {
    state: Arc<RwLock<TabsState<T>>>,
    observers: Arc<RwLock<Vec<Arc<dyn TabsObserver>>>>,
    options: TabsOptions<T>,
}

impl<T> TabRegistry<T>
where
    T: Clone + Send + Sync + 'static,
{
    pub fn new(options: TabsOptions<T>) -> Self {
        Self {
            state: Arc::new(RwLock::new(TabsState {
                tabs: Vec::new(),
                active_tab: None,
            })),
            observers: Arc::new(RwLock::new(Vec::new())),
            options,
        }
    }

    pub fn options(&self) -> &TabsOptions<T> {
        &self.options
    }

    /// Register an observer called after every mutation
    pub fn subscribe<O>(&self, observer: O)
    where
        O: TabsObserver + 'static,
    {
        self.observers.write().push(Arc::new(observer));
    }

    /// Currently active tab
    pub fn active_tab(&self) -> Option<String> {
        self.state.read().active_tab.clone()
    }

    /// Activate a tab. Membership is not checked.
    pub fn set_active_tab(&self, tab: impl Into<String>) {
        let tab = tab.into();
        tracing::debug!(tab = %tab, "Activating tab");
        self.state.write().active_tab = Some(tab);
        self.notify(&[TabsChange::ActiveTab]);
    }

    pub fn len(&self) -> usize {
        self.state.read().tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.read().tabs.is_empty()
    }

    pub fn has_tab(&self, tab: &str) -> bool {
        self.state.read().index_of(tab).is_some()
    }

    pub fn get_tab_data(&self, tab: &str) -> Option<T> {
        let state = self.state.read();
        state.index_of(tab).map(|i| state.tabs[i].1.clone())
    }

    /// Replace the data of an existing tab; unknown tabs are skipped
    pub fn set_tab_data(&self, tab: &str, data: T) {
        {
            let mut state = self.state.write();
            match state.index_of(tab) {
                Some(i) => state.tabs[i].1 = data,
                None => return,
            }
        }
        self.notify(&[TabsChange::Tabs]);
    }

    /// Snapshot of all tabs in order
    pub fn get_tabs(&self) -> Vec<(String, T)> {
        self.state.read().tabs.clone()
    }

    /// Replace every tab at once. The active tab is left untouched.
    ///
    /// A repeated tab keeps its first position and its last data.
    pub fn set_tabs<I>(&self, tabs: I)
    where
        I: IntoIterator<Item = (String, T)>,
    {
        let mut deduped: Vec<(String, T)> = Vec::new();
        for (tab, data) in tabs {
            match deduped.iter_mut().find(|(t, _)| *t == tab) {
                Some(entry) => entry.1 = data,
                None => deduped.push((tab, data)),
            }
        }

        tracing::debug!(count = deduped.len(), "Replacing tabs");
        self.state.write().tabs = deduped;
        self.notify(&[TabsChange::Tabs]);
    }

    /// Position of a tab in insertion order
    pub fn index_of(&self, tab: &str) -> Option<usize> {
        self.state.read().index_of(tab)
    }

    /// Tabs strictly on one side of `tab`.
    ///
    /// An unknown tab sits before the first one: nothing is on its left and
    /// everything is on its right.
    pub fn get_side_tabs(&self, tab: &str, side: TabSide) -> Vec<(String, T)> {
        let state = self.state.read();
        let index = state.index_of(tab);
        match (side, index) {
            (TabSide::Left, Some(i)) => state.tabs[..i].to_vec(),
            (TabSide::Left, None) => Vec::new(),
            (TabSide::Right, Some(i)) => state.tabs[i + 1..].to_vec(),
            (TabSide::Right, None) => state.tabs.clone(),
        }
    }

    /// Append a new tab and activate it. Existing tabs are left as they are;
    /// use [`TabRegistry::set_tab_data`] to update them.
    pub fn add_tab(&self, tab: impl Into<String>, data: T) {
        let tab = tab.into();
        {
            let mut state = self.state.write();
            if state.index_of(&tab).is_some() {
                return;
            }
            state.tabs.push((tab.clone(), data));
            state.active_tab = Some(tab.clone());
        }

        tracing::debug!(tab = %tab, "Added tab");
        self.notify(&[TabsChange::Tabs, TabsChange::ActiveTab]);
    }

    /// Whether `tab` (default: the active tab) may be closed.
    ///
    /// Always false while at most one tab is open. Unknown tabs are
    /// removable.
    pub fn can_remove_tab(&self, tab: Option<&str>) -> bool {
        match self.resolve_target(tab) {
            Some(target) => self.is_removable(&self.get_tabs(), &target),
            None => false,
        }
    }

    /// Whether any tab other than `tab` (default: the active tab) may be
    /// closed
    pub fn can_remove_other_tabs(&self, tab: Option<&str>) -> bool {
        let Some(target) = self.resolve_target(tab) else {
            return false;
        };

        let tabs = self.get_tabs();
        tabs.iter()
            .any(|(t, _)| *t != target && self.is_removable(&tabs, t))
    }

    /// Whether any tab on `side` of `tab` (default: the active tab) may be
    /// closed
    pub fn can_remove_side_tabs(&self, side: TabSide, tab: Option<&str>) -> bool {
        let Some(target) = self.resolve_target(tab) else {
            return false;
        };

        let tabs = self.get_tabs();
        self.get_side_tabs(&target, side)
            .iter()
            .any(|(t, _)| self.is_removable(&tabs, t))
    }

    /// Run the `before_remove` hook for each tab, one after another.
    ///
    /// Stops at the first hook that declines or fails. Nothing is removed
    /// here; a `true` result only means every confirmation passed.
    pub async fn try_remove_tabs<K: AsTab>(&self, tabs: &[K]) -> bool {
        if self.is_empty() || tabs.is_empty() {
            return false;
        }

        let mut valid = true;
        for target in tabs {
            let tab = target.as_tab();
            let outcome = match self.get_tab_data(tab) {
                Some(data) => self.options.confirm_remove(tab, &data).await,
                None => Err(TabError::NotFound(tab.to_string())),
            };

            match outcome {
                Ok(allow) => valid = valid && allow,
                Err(err) => {
                    tracing::debug!(tab = %tab, error = %err, "Tab removal rejected");
                    valid = false;
                }
            }

            if !valid {
                break;
            }
        }

        valid
    }

    /// Close `tab` (default: the active tab).
    ///
    /// Closing the active tab activates its left neighbour, or its right
    /// neighbour when it is the first tab.
    pub async fn remove_tab(&self, tab: Option<&str>) {
        let Some(target) = self.resolve_target(tab) else {
            return;
        };

        if self.len() <= 1
            || !self.is_removable(&self.get_tabs(), &target)
            || !self.try_remove_tabs(&[target.as_str()]).await
        {
            return;
        }

        let active_changed = {
            let mut state = self.state.write();
            let Some(index) = state.index_of(&target) else {
                return;
            };

            let is_active = state.active_tab.as_deref() == Some(target.as_str());
            if is_active {
                let next = index
                    .checked_sub(1)
                    .and_then(|i| state.tabs.get(i))
                    .or_else(|| state.tabs.get(index + 1))
                    .map(|(t, _)| t.clone());
                state.active_tab = next;
            }

            state.tabs.remove(index);
            is_active
        };

        tracing::info!(tab = %target, "Removed tab");
        if active_changed {
            self.notify(&[TabsChange::ActiveTab, TabsChange::Tabs]);
        } else {
            self.notify(&[TabsChange::Tabs]);
        }
    }

    /// Close every removable tab except `tab` (default: the active tab),
    /// which becomes the active tab.
    pub async fn remove_other_tabs(&self, tab: Option<&str>) {
        let Some(target) = self.resolve_target(tab) else {
            return;
        };

        let tabs = self.get_tabs();
        let others: Vec<(String, T)> = tabs
            .iter()
            .filter(|(t, _)| *t != target && self.is_removable(&tabs, t))
            .cloned()
            .collect();

        if !self.try_remove_tabs(&others).await {
            return;
        }

        self.remove_confirmed(&target, &others, false);
    }

    /// Close every removable tab on `side` of `tab` (default: the active
    /// tab). If the active tab is among them, `tab` becomes active.
    pub async fn remove_side_tabs(&self, side: TabSide, tab: Option<&str>) {
        let Some(target) = self.resolve_target(tab) else {
            return;
        };

        let tabs = self.get_tabs();
        let side_tabs: Vec<(String, T)> = self
            .get_side_tabs(&target, side)
            .into_iter()
            .filter(|(t, _)| self.is_removable(&tabs, t))
            .collect();

        if !self.try_remove_tabs(&side_tabs).await {
            return;
        }

        self.remove_confirmed(&target, &side_tabs, true);
    }

    /// Delete confirmed tabs, activating `target` first when needed.
    ///
    /// With `only_if_removed` the target is activated only when the current
    /// active tab is one of the removed tabs.
    fn remove_confirmed(&self, target: &str, removed: &[(String, T)], only_if_removed: bool) {
        let active_changed = {
            let mut state = self.state.write();
            let active = state.active_tab.as_deref();
            let activate = active != Some(target)
                && (!only_if_removed || removed.iter().any(|(t, _)| Some(t.as_str()) == active));
            if activate {
                state.active_tab = Some(target.to_string());
            }

            state
                .tabs
                .retain(|(t, _)| !removed.iter().any(|(r, _)| r == t));
            activate
        };

        tracing::info!(tab = %target, removed = removed.len(), "Removed tabs");
        if active_changed {
            self.notify(&[TabsChange::ActiveTab, TabsChange::Tabs]);
        } else {
            self.notify(&[TabsChange::Tabs]);
        }
    }

    /// Explicit target, else the active tab. Empty names never resolve.
    fn resolve_target(&self, tab: Option<&str>) -> Option<String> {
        tab.map(str::to_string)
            .or_else(|| self.active_tab())
            .filter(|t| !t.is_empty())
    }

    /// Single tab removability against a snapshot of the registry
    fn is_removable(&self, tabs: &[(String, T)], tab: &str) -> bool {
        if tabs.len() <= 1 {
            return false;
        }

        match tabs.iter().find(|(t, _)| t == tab) {
            Some((_, data)) => self.options.check_removable(tab, data),
            None => true,
        }
    }

    fn notify(&self, changes: &[TabsChange]) {
        let observers: Vec<Arc<dyn TabsObserver>> = self.observers.read().clone();
        for change in changes {
            for observer in &observers {
                observer.on_change(*change);
            }
        }
    }
}

impl<T> Default for TabRegistry<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new(TabsOptions::default())
    }
}

impl<T> Clone for TabRegistry<T> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            observers: Arc::clone(&self.observers),
            options: self.options.clone(),
        }
    }
}
