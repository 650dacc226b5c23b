//! Global Application State
//!
//! Reactive state management using Leptos signals. The record store itself
//! is not reactive; `briefs` mirrors its current listing and is refreshed
//! after every mutation so components re-render from one source.

use chrono::{DateTime, Utc};
use leptos::*;
use serde_json::{Map, Value};
use std::cell::RefCell;
use std::rc::Rc;

use competeiq::store::{Brief, BriefStore};

use crate::storage::LocalStorageBackend;

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// The browser-backed record store (single writer, single tab)
    store: Rc<RefCell<BriefStore>>,
    /// Current collection listing, newest first
    pub briefs: RwSignal<Vec<Brief>>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let backend = LocalStorageBackend::new().expect("localStorage unavailable");
    let store = BriefStore::open(Box::new(backend)).expect("failed to open brief store");

    let state = GlobalState {
        store: Rc::new(RefCell::new(store)),
        briefs: create_rw_signal(Vec::new()),
        error: create_rw_signal(None),
        success: create_rw_signal(None),
    };
    state.refresh();

    provide_context(state);
}

impl GlobalState {
    /// Re-read the listing from the store into the `briefs` signal
    pub fn refresh(&self) {
        self.briefs.set(self.store.borrow().list(None, None));
    }

    /// Look up a single brief by id
    pub fn find(&self, id: u64) -> Option<Brief> {
        let mut criteria = Map::new();
        criteria.insert("id".to_string(), Value::from(id));
        self.store.borrow().filter(&criteria).into_iter().next()
    }

    /// Exact-match lookup across the collection
    pub fn lookup(&self, criteria: &Map<String, Value>) -> Vec<Brief> {
        self.store.borrow().filter(criteria)
    }

    /// Create a brief and refresh the listing
    pub fn create_brief(&self, fields: Map<String, Value>) -> Result<Brief, String> {
        let result = self
            .store
            .borrow_mut()
            .create(fields)
            .map_err(|e| e.to_string());
        self.refresh();
        result
    }

    /// Merge fields into a brief and refresh the listing
    pub fn update_brief(&self, id: u64, partial: Map<String, Value>) -> Result<Brief, String> {
        let result = self
            .store
            .borrow_mut()
            .update(id, partial)
            .map_err(|e| e.to_string());
        self.refresh();
        result
    }

    /// Delete a brief and refresh the listing
    pub fn delete_brief(&self, id: u64) -> Result<Brief, String> {
        let result = self
            .store
            .borrow_mut()
            .delete(id)
            .map_err(|e| e.to_string());
        self.refresh();
        result
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }
}

/// Short human-readable date for cards and detail rows
pub fn format_date(dt: &DateTime<Utc>) -> String {
    dt.format("%b %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_date() {
        let dt = Utc.with_ymd_and_hms(2025, 3, 7, 12, 30, 0).unwrap();
        assert_eq!(format_date(&dt), "Mar 7, 2025");
    }
}
