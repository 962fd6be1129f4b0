//! Primary-key lookup for attack records.
//!
//! The primary key is a display-only identifier kept in an external table
//! next to each attack's id and name. It is not part of the record file, so
//! resolving it is best-effort: a record works the same with or without it.

use rustc_hash::FxHashMap;

use crate::error::LookupError;

/// A source of attack primary keys.
pub trait PrimaryKeyLookup {
    /// Find the primary key of the attack with this id and name.
    fn lookup_primary_key(&self, id: u16, name: &str) -> Result<u16, LookupError>;
}

impl<T: PrimaryKeyLookup + ?Sized> PrimaryKeyLookup for &T {
    fn lookup_primary_key(&self, id: u16, name: &str) -> Result<u16, LookupError> {
        (**self).lookup_primary_key(id, name)
    }
}

/// A lookup with no source connected.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLookup;

impl PrimaryKeyLookup for NoLookup {
    fn lookup_primary_key(&self, _id: u16, _name: &str) -> Result<u16, LookupError> {
        Err(LookupError::Unavailable)
    }
}

/// One row of an attack key table.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KeyRow {
    /// Primary key.
    pub pk: u16,
    /// Attack id.
    pub id: u16,
    /// Attack name.
    pub name: String,
}

/// An in-memory attack key table keyed by `(id, name)`.
#[derive(Debug, Clone, Default)]
pub struct KeyTable {
    keys: FxHashMap<(u16, String), u16>,
}

impl KeyTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from rows. Later rows win on duplicate `(id, name)`.
    pub fn from_rows<I: IntoIterator<Item = KeyRow>>(rows: I) -> Self {
        let mut table = Self::new();
        for row in rows {
            table.insert(row.id, row.name, row.pk);
        }
        table
    }

    /// Load a table from a JSON array of `{ "pk", "id", "name" }` objects.
    #[cfg(feature = "json")]
    pub fn from_json_reader<R: std::io::Read>(reader: R) -> crate::Result<Self> {
        let rows: Vec<KeyRow> = serde_json::from_reader(reader)?;
        Ok(Self::from_rows(rows))
    }

    /// Load a table from a JSON string.
    #[cfg(feature = "json")]
    pub fn from_json_str(json: &str) -> crate::Result<Self> {
        let rows: Vec<KeyRow> = serde_json::from_str(json)?;
        Ok(Self::from_rows(rows))
    }

    /// Insert a key, returning the previous key for this id and name.
    pub fn insert(&mut self, id: u16, name: impl Into<String>, pk: u16) -> Option<u16> {
        self.keys.insert((id, name.into()), pk)
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Check if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl PrimaryKeyLookup for KeyTable {
    fn lookup_primary_key(&self, id: u16, name: &str) -> Result<u16, LookupError> {
        self.keys
            .get(&(id, name.to_string()))
            .copied()
            .ok_or_else(|| LookupError::NotFound {
                id,
                name: name.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_lookup() {
        assert_eq!(
            NoLookup.lookup_primary_key(7, "Tackle"),
            Err(LookupError::Unavailable)
        );
    }

    #[test]
    fn test_table_matches_id_and_name() {
        let mut table = KeyTable::new();
        table.insert(7, "Tackle", 112);
        table.insert(7, "Tackle II", 113);

        assert_eq!(table.lookup_primary_key(7, "Tackle"), Ok(112));
        assert_eq!(table.lookup_primary_key(7, "Tackle II"), Ok(113));
        assert!(matches!(
            table.lookup_primary_key(8, "Tackle"),
            Err(LookupError::NotFound { id: 8, .. })
        ));
    }

    #[test]
    fn test_from_rows_later_wins() {
        let table = KeyTable::from_rows([
            KeyRow { pk: 1, id: 3, name: "Ember".into() },
            KeyRow { pk: 2, id: 3, name: "Ember".into() },
        ]);
        assert_eq!(table.len(), 1);
        assert_eq!(table.lookup_primary_key(3, "Ember"), Ok(2));
    }

    #[cfg(feature = "json")]
    #[test]
    fn test_from_json() {
        let json = r#"[{"pk": 40, "id": 7, "name": "Tackle"}, {"pk": 41, "id": 9, "name": "Heal Pulse"}]"#;
        let table = KeyTable::from_json_str(json).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.lookup_primary_key(9, "Heal Pulse"), Ok(41));

        assert!(KeyTable::from_json_str("{").is_err());
    }
}
