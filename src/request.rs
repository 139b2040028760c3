use chrono::NaiveDateTime;
use findoc_templates::{DocumentKind, FieldSource};
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// An insertion-ordered string map.
///
/// Order matters: the receipt and transfer-proof templates dump every field
/// in payload order, so a plain `BTreeMap`/`HashMap` would reshuffle the
/// document body.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldMap(Vec<(String, String)>);

impl FieldMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a field, keeping its original position when the
    /// key already exists.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.0.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FieldSource for FieldMap {
    fn get(&self, key: &str) -> Option<&str> {
        FieldMap::get(self, key)
    }
}

impl FromIterator<(String, String)> for FieldMap {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut map = FieldMap::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

impl Serialize for FieldMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, value) in &self.0 {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for FieldMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct FieldMapVisitor;

        impl<'de> Visitor<'de> for FieldMapVisitor {
            type Value = FieldMap;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a flat string-to-string object")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut map = FieldMap::new();
                while let Some((key, value)) = access.next_entry::<String, String>()? {
                    map.insert(key, value);
                }
                Ok(map)
            }
        }

        deserializer.deserialize_map(FieldMapVisitor)
    }
}

/// One document to render. Constructed by the caller (CLI or library
/// user), consumed synchronously, and discarded; the renderer keeps no
/// state between requests.
#[derive(Debug, Clone)]
pub struct DocumentRequest {
    pub kind: DocumentKind,
    pub fields: FieldMap,
    /// Table rows, statement kinds only. Rows whose length does not match
    /// the kind's column count are skipped with a warning.
    pub rows: Vec<Vec<String>>,
    /// Emission timestamp override; `None` means "now". Pinning it makes
    /// rendering fully reproducible.
    pub issued_at: Option<NaiveDateTime>,
}

impl DocumentRequest {
    pub fn new(kind: DocumentKind) -> Self {
        Self {
            kind,
            fields: FieldMap::new(),
            rows: Vec::new(),
            issued_at: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_preserves_order_and_replaces_in_place() {
        let mut map = FieldMap::new();
        map.insert("b", "1");
        map.insert("a", "2");
        map.insert("b", "3");
        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![("b", "3"), ("a", "2")]);
    }

    #[test]
    fn json_object_order_survives_deserialization() {
        let map: FieldMap =
            serde_json::from_str(r#"{"z":"1","Sócio":"Nome","a":"2"}"#).unwrap();
        let keys: Vec<_> = map.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["z", "Sócio", "a"]);
    }
}
