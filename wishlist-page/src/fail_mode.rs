//! Fail-mode interceptor
//!
//! When enabled, fail mode replaces the item list with a single placeholder
//! that is not a valid item, and blocks clicks on non-exempt actionable
//! elements, raising the next canned logical error instead.
//!
//! The flag is read from storage once at mount and persisted on every
//! toggle. The rotation counter lives only for the session.

use serde_json::json;

use wishlist_common::{Item, LogicalError, logical_error};

use crate::constants::FAIL_MODE_KEY;
use crate::diagnostics::{DiagnosticSink, ErrorRecord};
use crate::dom::{ElementId, ElementTree};
use crate::storage::{FlagStore, read_flag, write_flag};

/// Entry of the displayed list
#[derive(Debug, Clone, PartialEq)]
pub enum ListEntry {
    Item(Item),
    /// Entry of unknown shape
    Opaque(serde_json::Value),
}

/// A click fail mode swallowed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockedClick {
    pub error: LogicalError,
    pub label: String,
}

/// Result of capture-phase interception
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Interception {
    /// The click proceeds normally
    Passed,
    /// Default action prevented and propagation stopped
    Blocked(BlockedClick),
}

/// Fail-mode state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FailMode {
    enabled: bool,
    /// Clicks blocked so far; selects the next catalog entry
    rotation: u64,
}

impl FailMode {
    /// Read the persisted flag
    pub fn load(store: &dyn FlagStore) -> Self {
        Self {
            enabled: read_flag(store, FAIL_MODE_KEY),
            rotation: 0,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn rotation(&self) -> u64 {
        self.rotation
    }

    /// Toggle fail mode and persist the new value
    ///
    /// Write failures are logged and otherwise ignored; the in-memory flag
    /// is updated regardless.
    pub fn set_enabled(&mut self, enabled: bool, store: &mut dyn FlagStore) {
        self.enabled = enabled;
        if let Err(e) = write_flag(store, FAIL_MODE_KEY, enabled) {
            tracing::debug!(error = %e, "failed to persist fail mode");
        }
    }

    /// Entries to display for `items`
    pub fn displayed_entries(&self, items: &[Item]) -> Vec<ListEntry> {
        if self.enabled {
            vec![ListEntry::Opaque(json!({ "placeholder": true }))]
        } else {
            items.iter().cloned().map(ListEntry::Item).collect()
        }
    }

    /// Capture-phase click handler
    ///
    /// Never panics; a blocked click is only logged.
    pub fn intercept(
        &mut self,
        tree: &ElementTree,
        target: ElementId,
        sink: &dyn DiagnosticSink,
        label_max_chars: usize,
    ) -> Interception {
        if !self.enabled {
            return Interception::Passed;
        }
        let Some(actionable) = tree.nearest_actionable(target) else {
            return Interception::Passed;
        };
        if tree.get(actionable).is_some_and(|e| e.exempt) {
            return Interception::Passed;
        }

        let error = logical_error(self.rotation);
        self.rotation = self.rotation.wrapping_add(1);

        let label = tree.accessible_label(actionable, label_max_chars);
        let record = ErrorRecord {
            code: error.code.to_string(),
            message: error.message.to_string(),
            label: label.clone(),
        };
        sink.log_error(&record);
        tracing::error!(code = error.code, label = %label, "logical error: {}", error.message);

        Interception::Blocked(BlockedClick { error, label })
    }

    /// Restart the rotation from the first catalog entry
    pub fn reset_rotation(&mut self) {
        self.rotation = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::NoopSink;
    use crate::dom::{Element, ElementKind};
    use crate::storage::{MemoryStore, StorageError};
    use crate::types::Message;
    use std::sync::Mutex;
    use wishlist_common::LOGICAL_ERRORS;

    #[derive(Default)]
    struct RecordingSink {
        records: Mutex<Vec<ErrorRecord>>,
    }

    impl DiagnosticSink for RecordingSink {
        fn log_error(&self, record: &ErrorRecord) {
            self.records.lock().unwrap().push(record.clone());
        }
    }

    struct Page {
        tree: ElementTree,
        remove_text: ElementId,
        toggle: ElementId,
        heading: ElementId,
    }

    fn page() -> Page {
        let mut tree = ElementTree::new();
        let root = tree.push(Element::container());
        let heading = tree.push(Element::text("My wishlist").under(root));
        let remove = tree.push(Element::button(Message::Remove("1".into())).under(root));
        let remove_text = tree.push(Element::text(" Remove ").under(remove));
        let toggle = tree.push(
            Element::new(ElementKind::Checkbox)
                .with_action(Message::SetFailMode(false))
                .with_text("Fail mode")
                .exempt()
                .under(root),
        );
        Page {
            tree,
            remove_text,
            toggle,
            heading,
        }
    }

    fn enabled() -> FailMode {
        let mut store = MemoryStore::new();
        let mut mode = FailMode::default();
        mode.set_enabled(true, &mut store);
        mode
    }

    #[test]
    fn test_load_defaults_off() {
        assert!(!FailMode::load(&MemoryStore::new()).is_enabled());
        let store = MemoryStore::new().with(FAIL_MODE_KEY, "true");
        assert!(FailMode::load(&store).is_enabled());
    }

    /// Store that can be read but rejects every write
    struct ReadOnlyStore;

    impl FlagStore for ReadOnlyStore {
        fn read(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Ok(None)
        }

        fn write(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable)
        }
    }

    #[test]
    fn test_set_enabled_store_failure() {
        let mut store = ReadOnlyStore;
        let mut mode = FailMode::load(&store);
        mode.set_enabled(true, &mut store);
        assert!(mode.is_enabled());
        mode.set_enabled(false, &mut store);
        assert!(!mode.is_enabled());
    }

    #[test]
    fn test_set_enabled_persists() {
        let mut store = MemoryStore::new();
        let mut mode = FailMode::default();
        mode.set_enabled(true, &mut store);
        assert!(mode.is_enabled());
        assert!(FailMode::load(&store).is_enabled());
    }

    #[test]
    fn test_disabled_passes() {
        let p = page();
        let mut mode = FailMode::default();
        assert_eq!(
            mode.intercept(&p.tree, p.remove_text, &NoopSink, 80),
            Interception::Passed
        );
        assert_eq!(mode.rotation(), 0);
    }

    #[test]
    fn test_blocks_and_rotates() {
        let p = page();
        let sink = RecordingSink::default();
        let mut mode = enabled();

        for i in 0..7 {
            let Interception::Blocked(blocked) = mode.intercept(&p.tree, p.remove_text, &sink, 80)
            else {
                panic!("click {} was not blocked", i);
            };
            assert_eq!(blocked.error, LOGICAL_ERRORS[i % LOGICAL_ERRORS.len()]);
            assert_eq!(blocked.label, "Remove");
        }
        assert_eq!(mode.rotation(), 7);

        let records = sink.records.lock().unwrap();
        assert_eq!(records.len(), 7);
        assert_eq!(records[5].code, LOGICAL_ERRORS[0].code);
    }

    #[test]
    fn test_exempt_passes_without_rotating() {
        let p = page();
        let mut mode = enabled();
        assert_eq!(
            mode.intercept(&p.tree, p.toggle, &NoopSink, 80),
            Interception::Passed
        );
        assert_eq!(mode.rotation(), 0);
    }

    #[test]
    fn test_non_actionable_passes() {
        let p = page();
        let mut mode = enabled();
        assert_eq!(
            mode.intercept(&p.tree, p.heading, &NoopSink, 80),
            Interception::Passed
        );
        assert_eq!(mode.rotation(), 0);
    }

    #[test]
    fn test_label_capped() {
        let p = page();
        let mut mode = enabled();
        let Interception::Blocked(blocked) = mode.intercept(&p.tree, p.remove_text, &NoopSink, 3)
        else {
            panic!("not blocked");
        };
        assert_eq!(blocked.label, "Rem");
    }

    #[test]
    fn test_displayed_entries() {
        let items = vec![
            Item::new("1", "Lamp", "Home", 10.0),
            Item::new("2", "Mug", "Kitchen", 4.0),
        ];
        let off = FailMode::default();
        assert_eq!(off.displayed_entries(&items).len(), 2);

        let on = enabled();
        let entries = on.displayed_entries(&items);
        assert_eq!(entries.len(), 1);
        let ListEntry::Opaque(value) = &entries[0] else {
            panic!("expected placeholder");
        };
        assert!(serde_json::from_value::<Item>(value.clone()).is_err());
    }

    #[test]
    fn test_reset_rotation() {
        let p = page();
        let mut mode = enabled();
        mode.intercept(&p.tree, p.remove_text, &NoopSink, 80);
        mode.reset_rotation();
        let Interception::Blocked(blocked) = mode.intercept(&p.tree, p.remove_text, &NoopSink, 80)
        else {
            panic!("not blocked");
        };
        assert_eq!(blocked.error, LOGICAL_ERRORS[0]);
    }
}
