//! Change notification
//!
//! The registry knows nothing about the UI's reactivity system. Renderers
//! subscribe an observer and re-read `get_tabs()` / `active_tab()` when told.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TabsChange {
    /// Tabs were added, removed, reordered or their data replaced
    Tabs,
    /// The active tab reference changed
    ActiveTab,
}

pub trait TabsObserver: Send + Sync {
    fn on_change(&self, change: TabsChange);
}

impl<F> TabsObserver for F
where
    F: Fn(TabsChange) + Send + Sync,
{
    fn on_change(&self, change: TabsChange) {
        self(change)
    }
}
