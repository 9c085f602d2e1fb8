//! Persistent dashboard card visibility.
//!
//! The mapping is read once when the store is created and written back after
//! every mutation. Storage problems never reach the caller: reads fall back to
//! the default mapping and failed writes only leave storage stale.

use crate::cards::CardId;
use crate::storage::KeyValueStore;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

pub const CARDS_STORAGE_KEY: &str = "fidelio-dashboard-cards";

/// Visibility flag for every known card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CardVisibility {
    cards: BTreeMap<CardId, bool>,
}

impl Default for CardVisibility {
    fn default() -> Self {
        Self {
            cards: CardId::ALL.iter().map(|id| (*id, true)).collect(),
        }
    }
}

impl CardVisibility {
    pub fn get(&self, card: CardId) -> bool {
        self.cards.get(&card).copied().unwrap_or(true)
    }

    pub fn set(&mut self, card: CardId, visible: bool) {
        self.cards.insert(card, visible);
    }

    pub fn iter(&self) -> impl Iterator<Item = (CardId, bool)> + '_ {
        self.cards.iter().map(|(id, visible)| (*id, *visible))
    }

    /// Parse a stored record and lay it over the defaults.
    ///
    /// Unknown identifiers and non-boolean values are skipped so that records
    /// written by older or newer builds still load.
    pub fn from_stored(content: &str) -> anyhow::Result<Self> {
        let value: Value = serde_json::from_str(content)?;
        let Value::Object(stored) = value else {
            anyhow::bail!("stored card visibility is not a JSON object");
        };
        let mut merged = Self::default();
        for (key, value) in stored {
            let Ok(card) = key.parse::<CardId>() else {
                tracing::warn!(card = %key, "unknown dashboard card ignored");
                continue;
            };
            match value {
                Value::Bool(visible) => merged.set(card, visible),
                other => {
                    tracing::warn!(card = %card, value = %other, "non-boolean card visibility ignored");
                }
            }
        }
        Ok(merged)
    }

    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Owns the card visibility mapping and keeps it in sync with storage.
pub struct CardPreferences<S: KeyValueStore> {
    storage: S,
    key: String,
    visibility: CardVisibility,
    persisted: bool,
}

impl<S: KeyValueStore> CardPreferences<S> {
    pub fn load(storage: S) -> Self {
        Self::load_with_key(storage, CARDS_STORAGE_KEY)
    }

    pub fn load_with_key(storage: S, key: &str) -> Self {
        let visibility = match storage.get(key) {
            Ok(Some(content)) => match CardVisibility::from_stored(&content) {
                Ok(v) => v,
                Err(e) => {
                    tracing::error!(key, error = %e, "failed to parse dashboard card settings");
                    CardVisibility::default()
                }
            },
            Ok(None) => CardVisibility::default(),
            Err(e) => {
                tracing::error!(key, error = %e, "failed to load dashboard card settings");
                CardVisibility::default()
            }
        };
        Self {
            storage,
            key: key.to_string(),
            visibility,
            persisted: true,
        }
    }

    pub fn get_visibility(&self, card: CardId) -> bool {
        self.visibility.get(card)
    }

    /// Visibility by raw identifier. Cards this build does not know about are
    /// reported visible.
    pub fn visibility_of(&self, id: &str) -> bool {
        id.parse::<CardId>()
            .map(|card| self.visibility.get(card))
            .unwrap_or(true)
    }

    pub fn visibility(&self) -> &CardVisibility {
        &self.visibility
    }

    pub fn visible_cards(&self) -> impl Iterator<Item = CardId> + '_ {
        self.visibility
            .iter()
            .filter(|(_, visible)| *visible)
            .map(|(id, _)| id)
    }

    /// Whether the last write reached storage.
    pub fn is_persisted(&self) -> bool {
        self.persisted
    }

    pub fn toggle(&mut self, card: CardId) {
        let next = !self.visibility.get(card);
        tracing::debug!(card = %card, visible = next, "dashboard card toggled");
        self.visibility.set(card, next);
        self.persist();
    }

    pub fn set_visibility(&mut self, card: CardId, visible: bool) {
        self.visibility.set(card, visible);
        self.persist();
    }

    pub fn reset_to_default(&mut self) {
        self.visibility = CardVisibility::default();
        self.persist();
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    fn persist(&mut self) {
        let result = self
            .visibility
            .to_json()
            .and_then(|json| self.storage.set(&self.key, &json));
        self.persisted = match result {
            Ok(()) => true,
            Err(e) => {
                tracing::error!(key = %self.key, error = %e, "failed to save dashboard card settings");
                false
            }
        };
    }
}
