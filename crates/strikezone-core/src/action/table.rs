//! Potency lookup table keyed by action id.
//!
//! The table is loaded once at startup and never changes afterwards. Hit
//! resolution does not read it; the effect-application step looks up the
//! entry for the cast action and scales its damage or healing per hit.
//!
//! The JSON form is an object keyed by the action id as a string:
//!
//! ```json
//! {
//!   "9":  { "potency": 150, "combo_potency": 0 },
//!   "15": { "potency": 100, "combo_potency": 300, "rear_potency": 340 },
//!   "120": { "cure_potency": 450 }
//! }
//! ```
//!
//! Missing fields default to zero.

use std::collections::BTreeMap;
use std::io::Read;

use serde::{Deserialize, Serialize};

use super::ActionId;
use crate::error::{ActionDataError, Result};

/// Potency values for one action.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActionEntry {
    /// Base potency
    pub potency: u16,
    /// Potency when used as a combo follow-up
    pub combo_potency: u16,
    /// Potency when striking from the flank
    pub flank_potency: u16,
    /// Potency when striking from the front
    pub front_potency: u16,
    /// Potency when striking from the rear
    pub rear_potency: u16,
    /// Healing potency
    pub cure_potency: u16,
}

/// Immutable action potency table.
///
/// # Example
///
/// ```
/// use strikezone_core::action::{ActionId, ActionTable};
///
/// let table = ActionTable::from_json_str(r#"{ "9": { "potency": 150 } }"#).unwrap();
/// assert_eq!(table.get(ActionId::new(9)).unwrap().potency, 150);
/// assert!(table.get(ActionId::new(10)).is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionTable {
    entries: BTreeMap<ActionId, ActionEntry>,
}

impl ActionTable {
    /// Builds a table from `(id, entry)` pairs.
    ///
    /// # Errors
    ///
    /// Returns [`ActionDataError::DuplicateAction`] if an id appears twice.
    pub fn from_entries<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (ActionId, ActionEntry)>,
    {
        let mut map = BTreeMap::new();
        for (id, entry) in entries {
            if map.insert(id, entry).is_some() {
                return Err(ActionDataError::DuplicateAction(id));
            }
        }
        Ok(Self { entries: map })
    }

    /// Parses a table from its JSON form.
    ///
    /// # Errors
    ///
    /// Returns [`ActionDataError::Json`] for malformed JSON and
    /// [`ActionDataError::InvalidActionId`] for keys that are not action ids.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: BTreeMap<String, ActionEntry> = serde_json::from_str(json)?;
        Self::from_raw(raw)
    }

    /// Reads and parses a table from its JSON form.
    ///
    /// # Errors
    ///
    /// As [`ActionTable::from_json_str`], plus [`ActionDataError::Io`] if
    /// reading fails.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut json = String::new();
        reader.read_to_string(&mut json)?;
        Self::from_json_str(&json)
    }

    fn from_raw(raw: BTreeMap<String, ActionEntry>) -> Result<Self> {
        let entries = raw
            .into_iter()
            .map(|(key, entry)| {
                key.trim()
                    .parse::<u32>()
                    .map(|id| (ActionId::new(id), entry))
                    .map_err(|_| ActionDataError::InvalidActionId(key))
            })
            .collect::<Result<Vec<_>>>()?;

        let table = Self::from_entries(entries)?;
        tracing::debug!(actions = table.len(), "loaded action table");
        Ok(table)
    }

    /// Returns the entry for an action, if present.
    #[must_use]
    pub fn get(&self, id: ActionId) -> Option<&ActionEntry> {
        self.entries.get(&id)
    }

    /// Returns the number of actions in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table holds no actions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in action id order.
    pub fn iter(&self) -> impl Iterator<Item = (ActionId, &ActionEntry)> + '_ {
        self.entries.iter().map(|(id, entry)| (*id, entry))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "9":   { "potency": 150 },
        "15":  { "potency": 100, "combo_potency": 300, "rear_potency": 340 },
        "120": { "cure_potency": 450 }
    }"#;

    #[test]
    fn parses_entries_with_defaults() {
        let table = ActionTable::from_json_str(SAMPLE).unwrap();
        assert_eq!(table.len(), 3);

        let combo = table.get(ActionId::new(15)).unwrap();
        assert_eq!(combo.potency, 100);
        assert_eq!(combo.combo_potency, 300);
        assert_eq!(combo.rear_potency, 340);
        assert_eq!(combo.flank_potency, 0);

        let cure = table.get(ActionId::new(120)).unwrap();
        assert_eq!(cure.cure_potency, 450);
        assert_eq!(cure.potency, 0);
    }

    #[test]
    fn iterates_in_id_order() {
        let table = ActionTable::from_json_str(SAMPLE).unwrap();
        let ids: Vec<u32> = table.iter().map(|(id, _)| id.as_u32()).collect();
        assert_eq!(ids, vec![9, 15, 120]);
    }

    #[test]
    fn reader_matches_str() {
        let from_reader = ActionTable::from_reader(SAMPLE.as_bytes()).unwrap();
        assert_eq!(from_reader, ActionTable::from_json_str(SAMPLE).unwrap());
    }

    #[test]
    fn empty_object_is_empty_table() {
        let table = ActionTable::from_json_str("{}").unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn non_numeric_key_is_rejected() {
        let err = ActionTable::from_json_str(r#"{ "fire": { "potency": 1 } }"#).unwrap_err();
        assert!(matches!(err, ActionDataError::InvalidActionId(ref key) if key == "fire"));
    }

    #[test]
    fn malformed_json_is_rejected() {
        let err = ActionTable::from_json_str(r#"{ "9": { "potency": "lots" } }"#).unwrap_err();
        assert!(matches!(err, ActionDataError::Json(_)));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let entry = ActionEntry {
            potency: 10,
            ..ActionEntry::default()
        };
        let err = ActionTable::from_entries([(ActionId::new(1), entry), (ActionId::new(1), entry)])
            .unwrap_err();
        assert!(matches!(err, ActionDataError::DuplicateAction(id) if id == ActionId::new(1)));
    }

    #[test]
    fn padded_keys_collide_after_parsing() {
        let err = ActionTable::from_json_str(r#"{ "7": {}, " 7": {} }"#).unwrap_err();
        assert!(matches!(err, ActionDataError::DuplicateAction(_)));
    }
}
