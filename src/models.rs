//! Frontend Models
//!
//! Data structures matching backend entities.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// Whether a todo still needs doing.
///
/// The backend carries this as a `completed` bool with inverted polarity:
/// `true` is an active item, `false` a completed one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Active,
    Completed,
}

impl Status {
    pub fn label(self) -> &'static str {
        match self {
            Status::Active => "Active",
            Status::Completed => "Completed",
        }
    }

    pub fn is_active(self) -> bool {
        self == Status::Active
    }

    /// Flag as it travels over the bridge
    pub fn wire_flag(self) -> bool {
        self.is_active()
    }

    pub fn from_wire_flag(flag: bool) -> Self {
        if flag {
            Status::Active
        } else {
            Status::Completed
        }
    }
}

impl Serialize for Status {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bool(self.wire_flag())
    }
}

impl<'de> Deserialize<'de> for Status {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        bool::deserialize(deserializer).map(Status::from_wire_flag)
    }
}

/// Todo data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    pub item: String,
    #[serde(rename = "completed")]
    pub status: Status,
}

impl TodoItem {
    pub fn active(item: impl Into<String>) -> Self {
        Self {
            item: item.into(),
            status: Status::Active,
        }
    }
}

/// Label -> flag mapping sent to `save_todos`.
///
/// Keys keep the position of their first occurrence; a repeated label
/// overwrites the earlier value, so the last occurrence wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SaveSnapshot {
    entries: Vec<(String, Status)>,
}

impl SaveSnapshot {
    pub fn from_todos(todos: &[TodoItem]) -> Self {
        let mut entries: Vec<(String, Status)> = Vec::with_capacity(todos.len());
        for todo in todos {
            match entries.iter_mut().find(|(label, _)| *label == todo.item) {
                Some(entry) => entry.1 = todo.status,
                None => entries.push((todo.item.clone(), todo.status)),
            }
        }
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, label: &str) -> Option<Status> {
        self.entries
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, status)| *status)
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(label, _)| label.as_str())
    }
}

impl Serialize for SaveSnapshot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (label, status) in &self.entries {
            map.serialize_entry(label, status)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_uses_inverted_wire_flag() {
        let json = serde_json::to_string(&TodoItem::active("buy milk")).unwrap();
        assert_eq!(json, r#"{"item":"buy milk","completed":true}"#);

        let done: TodoItem =
            serde_json::from_str(r#"{"item":"walk dog","completed":false}"#).unwrap();
        assert_eq!(done.status, Status::Completed);
        assert_eq!(done.status.label(), "Completed");
    }

    #[test]
    fn test_snapshot_collapses_duplicates_to_last() {
        let todos = vec![
            TodoItem::active("a"),
            TodoItem { item: "b".to_string(), status: Status::Completed },
            TodoItem { item: "a".to_string(), status: Status::Completed },
        ];
        let snapshot = SaveSnapshot::from_todos(&todos);

        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot.get("a"), Some(Status::Completed));
        assert_eq!(snapshot.labels().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(
            serde_json::to_string(&snapshot).unwrap(),
            r#"{"a":false,"b":false}"#
        );
    }

    #[test]
    fn test_snapshot_of_empty_list() {
        let snapshot = SaveSnapshot::from_todos(&[]);
        assert!(snapshot.is_empty());
        assert_eq!(serde_json::to_string(&snapshot).unwrap(), "{}");
    }
}
