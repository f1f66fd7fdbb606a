//! Global console state.
//!
//! Uses `RefCell`-wrapped `thread_local!` storage (WASM is single-threaded).
//! Extend `ConsoleState` and the accessor helpers to add new state fields.

use std::cell::RefCell;

/// Central console state.
#[derive(Clone, Debug, Default)]
pub struct ConsoleState {
    /// Container ids of every camera widget in the page, in document order.
    /// Captured once at startup; the page owns the markup.
    pub widget_ids: Vec<String>,
}

// ── Thread-local singleton ──

thread_local! {
    static STATE: RefCell<ConsoleState> = RefCell::new(ConsoleState::default());
}

/// Run a closure with shared read access to the state.
pub fn with<F, R>(f: F) -> R
where
    F: FnOnce(&ConsoleState) -> R,
{
    STATE.with(|s| f(&s.borrow()))
}

/// Run a closure with mutable access to the state.
pub fn with_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut ConsoleState) -> R,
{
    STATE.with(|s| f(&mut s.borrow_mut()))
}

// ── Convenience accessors ──

pub fn widget_ids() -> Vec<String> {
    with(|s| s.widget_ids.clone())
}

/// Replace the bound widget set.
pub fn set_widget_ids(ids: Vec<String>) {
    with_mut(|s| s.widget_ids = ids);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widget_ids_keep_insertion_order() {
        set_widget_ids(vec!["cam1".into(), "cam2".into(), "cam3".into()]);
        assert_eq!(widget_ids(), ["cam1", "cam2", "cam3"]);
    }

    #[test]
    fn rebinding_replaces_the_set() {
        set_widget_ids(vec!["cam1".into(), "cam2".into()]);
        set_widget_ids(vec!["cam9".into()]);
        assert_eq!(widget_ids(), ["cam9"]);
    }

    #[test]
    fn unbound_set_is_empty() {
        assert!(widget_ids().is_empty());
    }
}
