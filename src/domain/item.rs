use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Story point values offered by the estimation scale.
///
/// The form collaborator restricts its select input to these values; the
/// board model stores whatever the validated submit event carried.
pub const STORY_POINT_SCALE: [f64; 8] = [0.25, 0.5, 0.75, 1.0, 1.5, 2.0, 4.0, 5.0];

/// Unique identifier for a board item.
///
/// Opaque: the board never inspects the contents, only compares ids for
/// equality. Identity is stable for the lifetime of the item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Returns the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single work item on the board.
///
/// Serialized camelCase so the persisted blob stays compatible with state
/// written by earlier versions of the board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: ItemId,
    pub label: String,
    pub story_points_estimation: f64,
}

impl Item {
    /// Creates a new item with the given id, label, and estimate
    pub fn new(id: ItemId, label: impl Into<String>, story_points_estimation: f64) -> Self {
        Self {
            id,
            label: label.into(),
            story_points_estimation,
        }
    }
}

/// Capability for minting fresh unique ids.
///
/// Event intake depends on this for new items, and seed-board construction
/// for both column keys and item ids. Abstracted so tests can substitute a
/// deterministic generator.
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// Default generator backed by random v4 UUIDs
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn generate(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_id_display() {
        let id = ItemId::new("abc-123");
        assert_eq!(id.as_str(), "abc-123");
        assert_eq!(id.to_string(), "abc-123");
    }

    #[test]
    fn test_uuid_generator_unique() {
        let ids = UuidGenerator;
        let a = ids.generate();
        let b = ids.generate();
        assert_ne!(a, b);
    }

    #[test]
    fn test_item_serialization_camel_case() {
        let item = Item::new(ItemId::new("1"), "First task", 0.25);
        let json = serde_json::to_string(&item).unwrap();

        assert!(json.contains("storyPointsEstimation"));
        assert!(!json.contains("story_points_estimation"));

        let back: Item = serde_json::from_str(&json).unwrap();
        assert_eq!(back, item);
    }

    #[test]
    fn test_item_deserializes_original_blob_shape() {
        let json = r#"{"id":"1","label":"First task","storyPointsEstimation":0.25}"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert_eq!(item.id.as_str(), "1");
        assert_eq!(item.label, "First task");
        assert_eq!(item.story_points_estimation, 0.25);
    }
}
