use kaffiy_dashboard::cards::CardId;
use kaffiy_dashboard::preferences::{CardPreferences, CARDS_STORAGE_KEY};
use kaffiy_dashboard::storage::{FileStore, KeyValueStore, MemoryStore};
use std::cell::Cell;
use std::sync::Arc;
use tempfile::tempdir;

/// Storage that refuses every operation.
struct BrokenStore;

impl KeyValueStore for BrokenStore {
    fn get(&self, _key: &str) -> anyhow::Result<Option<String>> {
        anyhow::bail!("storage unavailable")
    }

    fn set(&self, _key: &str, _value: &str) -> anyhow::Result<()> {
        anyhow::bail!("quota exceeded")
    }

    fn remove(&self, _key: &str) -> anyhow::Result<()> {
        anyhow::bail!("storage unavailable")
    }
}

/// Counts writes on top of an in-memory store.
#[derive(Default)]
struct CountingStore {
    inner: MemoryStore,
    writes: Cell<usize>,
}

impl KeyValueStore for CountingStore {
    fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
        self.writes.set(self.writes.get() + 1);
        self.inner.set(key, value)
    }

    fn remove(&self, key: &str) -> anyhow::Result<()> {
        self.inner.remove(key)
    }
}

#[test]
fn empty_storage_shows_every_card() {
    let prefs = CardPreferences::load(MemoryStore::new());
    for card in CardId::ALL {
        assert!(prefs.get_visibility(card));
    }
    assert_eq!(prefs.visible_cards().count(), CardId::ALL.len());
}

#[test]
fn reset_restores_all_cards() {
    let mut prefs = CardPreferences::load(MemoryStore::new());
    prefs.set_visibility(CardId::ChurnAlert, false);
    prefs.toggle(CardId::TrialProgress);
    prefs.reset_to_default();
    for card in CardId::ALL {
        assert!(prefs.get_visibility(card), "{card} should be visible");
    }
}

#[test]
fn double_toggle_returns_to_previous_value() {
    let mut prefs = CardPreferences::load(MemoryStore::new());
    prefs.set_visibility(CardId::ActiveCampaigns, false);
    for card in CardId::ALL {
        let before = prefs.get_visibility(card);
        prefs.toggle(card);
        assert_ne!(prefs.get_visibility(card), before);
        prefs.toggle(card);
        assert_eq!(prefs.get_visibility(card), before);
    }
}

#[test]
fn partial_record_is_merged_with_defaults() {
    let store = MemoryStore::with_entry(CARDS_STORAGE_KEY, r#"{"card-visits-chart": false}"#);
    let prefs = CardPreferences::load(store);
    assert!(!prefs.get_visibility(CardId::VisitsChart));
    for card in CardId::ALL.into_iter().filter(|c| *c != CardId::VisitsChart) {
        assert!(prefs.get_visibility(card), "{card} should default to visible");
    }
}

#[test]
fn malformed_record_falls_back_to_defaults() {
    for stored in ["{\"card-visits-chart\": fal", "not json", "[false]", "null", ""] {
        let prefs = CardPreferences::load(MemoryStore::with_entry(CARDS_STORAGE_KEY, stored));
        assert_eq!(prefs.visible_cards().count(), CardId::ALL.len(), "input {stored:?}");
    }
}

#[test]
fn stale_unknown_cards_are_dropped_on_write() {
    let store = Arc::new(MemoryStore::with_entry(
        CARDS_STORAGE_KEY,
        r#"{"card-loyalty-map": false, "card-churn-alert": false}"#,
    ));
    let mut prefs = CardPreferences::load(Arc::clone(&store));
    assert!(!prefs.get_visibility(CardId::ChurnAlert));
    prefs.toggle(CardId::QuickActions);

    let written = store.get(CARDS_STORAGE_KEY).unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert!(value.get("card-loyalty-map").is_none());
    assert_eq!(value["card-churn-alert"], serde_json::json!(false));
    assert_eq!(value["card-quick-actions"], serde_json::json!(false));
}

#[test]
fn visibility_survives_reload() {
    let store = Arc::new(MemoryStore::new());
    let mut prefs = CardPreferences::load(Arc::clone(&store));
    prefs.set_visibility(CardId::WeeklyStats, false);
    drop(prefs);

    let reloaded = CardPreferences::load(Arc::clone(&store));
    assert!(!reloaded.get_visibility(CardId::WeeklyStats));
    assert!(reloaded.get_visibility(CardId::VisitsChart));
}

#[test]
fn visibility_survives_reload_from_disk() {
    let dir = tempdir().unwrap();
    let storage = FileStore::new(dir.path().join("storage"));
    let mut prefs = CardPreferences::load(&storage);
    prefs.set_visibility(CardId::WeeklyStats, false);
    prefs.toggle(CardId::ChurnAlert);

    let reloaded = CardPreferences::load(FileStore::new(dir.path().join("storage")));
    assert!(!reloaded.get_visibility(CardId::WeeklyStats));
    assert!(!reloaded.get_visibility(CardId::ChurnAlert));
    assert!(reloaded.get_visibility(CardId::TrialProgress));
}

#[test]
fn unknown_identifier_reads_visible() {
    let mut prefs = CardPreferences::load(MemoryStore::new());
    prefs.set_visibility(CardId::VisitsChart, false);
    assert!(prefs.visibility_of("card-loyalty-map"));
    assert!(prefs.visibility_of(""));
    assert!(!prefs.visibility_of("card-visits-chart"));
}

#[test]
fn storage_failures_are_swallowed() {
    let mut prefs = CardPreferences::load(BrokenStore);
    assert!(prefs.get_visibility(CardId::TrialProgress));
    assert!(prefs.is_persisted());

    prefs.toggle(CardId::TrialProgress);
    assert!(!prefs.get_visibility(CardId::TrialProgress));
    assert!(!prefs.is_persisted());
}

#[test]
fn every_mutation_writes_once() {
    let mut prefs = CardPreferences::load(CountingStore::default());
    prefs.toggle(CardId::QuickActions);
    prefs.toggle(CardId::QuickActions);
    prefs.set_visibility(CardId::WeeklyStats, false);
    prefs.reset_to_default();
    assert_eq!(prefs.storage().writes.get(), 4);
}

#[test]
fn custom_key_is_isolated() {
    let store = Arc::new(MemoryStore::new());
    let mut prefs = CardPreferences::load_with_key(Arc::clone(&store), "second-location");
    prefs.set_visibility(CardId::VisitsChart, false);

    assert!(store.get(CARDS_STORAGE_KEY).unwrap().is_none());
    assert!(CardPreferences::load(Arc::clone(&store)).get_visibility(CardId::VisitsChart));
}

#[test]
fn padded_stored_key_is_treated_as_unknown() {
    let store = MemoryStore::with_entry(CARDS_STORAGE_KEY, r#"{" card-visits-chart ": false}"#);
    let prefs = CardPreferences::load(store);
    assert!(prefs.get_visibility(CardId::VisitsChart));
    assert!(prefs.visibility_of(" card-visits-chart"));
    assert_eq!(prefs.visible_cards().count(), CardId::ALL.len());
}
