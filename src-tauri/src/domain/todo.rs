//! Todo Entity
//!
//! A todo is identified by its label. `completed == true` marks an item that
//! is still active; `false` marks it done. The frontend relies on this
//! polarity, so it is kept as-is on the wire.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A todo as sent to the frontend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    /// Label, doubles as the identity key
    pub item: String,
    /// `true` while active, `false` once completed
    pub completed: bool,
}

impl TodoItem {
    /// A freshly added (active) todo
    pub fn new(item: String) -> Self {
        Self {
            item,
            completed: true,
        }
    }
}

/// Ordered label -> flag mapping.
///
/// Used both as the `save_todos` argument and as the save file format
/// (a JSON object). Keys keep first-insertion order; inserting an existing
/// label overwrites its flag in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoMap {
    entries: Vec<(String, bool)>,
}

impl TodoMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, label: String, completed: bool) {
        match self.entries.iter_mut().find(|(l, _)| *l == label) {
            Some(entry) => entry.1 = completed,
            None => self.entries.push((label, completed)),
        }
    }

    pub fn get(&self, label: &str) -> Option<bool> {
        self.entries
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, completed)| *completed)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Collapse a list into a mapping; later duplicates win
    pub fn from_items(items: &[TodoItem]) -> Self {
        let mut map = Self::new();
        for todo in items {
            map.insert(todo.item.clone(), todo.completed);
        }
        map
    }

    /// Expand into a list in key order
    pub fn to_items(&self) -> Vec<TodoItem> {
        self.entries
            .iter()
            .map(|(item, completed)| TodoItem {
                item: item.clone(),
                completed: *completed,
            })
            .collect()
    }
}

impl Serialize for TodoMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (label, completed) in &self.entries {
            map.serialize_entry(label, completed)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for TodoMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct TodoMapVisitor;

        impl<'de> Visitor<'de> for TodoMapVisitor {
            type Value = TodoMap;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object mapping todo labels to booleans")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<TodoMap, A::Error> {
                let mut map = TodoMap::new();
                while let Some((label, completed)) = access.next_entry::<String, bool>()? {
                    map.insert(label, completed);
                }
                Ok(map)
            }
        }

        deserializer.deserialize_map(TodoMapVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_todo_is_active() {
        let todo = TodoItem::new("buy milk".to_string());
        assert!(todo.completed);
    }

    #[test]
    fn test_map_keeps_file_order() {
        let map: TodoMap = serde_json::from_str(r#"{"z":true,"a":false,"m":true}"#).unwrap();
        let labels: Vec<_> = map.to_items().into_iter().map(|t| t.item).collect();
        assert_eq!(labels, vec!["z", "a", "m"]);
        assert_eq!(serde_json::to_string(&map).unwrap(), r#"{"z":true,"a":false,"m":true}"#);
    }

    #[test]
    fn test_duplicate_labels_collapse_to_last() {
        let items = vec![
            TodoItem { item: "a".to_string(), completed: true },
            TodoItem { item: "b".to_string(), completed: true },
            TodoItem { item: "a".to_string(), completed: false },
        ];
        let map = TodoMap::from_items(&items);
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("a"), Some(false));
        assert_eq!(map.to_items()[0].item, "a");
    }

    #[test]
    fn test_rejects_non_boolean_flags() {
        assert!(serde_json::from_str::<TodoMap>(r#"{"a":"yes"}"#).is_err());
        assert!(serde_json::from_str::<TodoMap>(r#"["a"]"#).is_err());
    }
}
