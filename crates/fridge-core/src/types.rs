//! # Entity Types
//!
//! Refrigerator-domain entities referenced by the state store.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Entity Types                                    │
//! │                                                                         │
//! │  ┌─────────────────────┐        ┌──────────────────────────┐            │
//! │  │    Refrigerator     │        │      GroceryEntity       │            │
//! │  │  ─────────────────  │        │  ──────────────────────  │            │
//! │  │  id (i64)           │        │  id (i64)                │            │
//! │  │  name               │        │  name                    │            │
//! │  │  address (optional) │        │  description (optional)  │            │
//! │  └─────────────────────┘        │  physical_expire_date    │            │
//! │                                 └──────────────────────────┘            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The store holds these values opaquely: beyond the `id` field used for
//! lookups, no attribute is interpreted. Both types are serialized with
//! camelCase field names and exported to TypeScript so the frontend shares
//! the exact shapes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// Refrigerator
// =============================================================================

/// A refrigerator shared by one or more household members.
///
/// ## Identity
/// `id` is the unique numeric identifier assigned by the backend and is the
/// only field the state store interprets (selection and lookup match on it).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Refrigerator {
    /// Unique numeric identifier.
    pub id: i64,

    /// Display name shown in the fridge picker.
    pub name: String,

    /// Optional street address of the household.
    pub address: Option<String>,
}

impl Refrigerator {
    /// Creates a refrigerator with no address.
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Refrigerator {
            id,
            name: name.into(),
            address: None,
        }
    }
}

// =============================================================================
// Grocery Entity
// =============================================================================

/// A grocery item inside a refrigerator, or a grocery search result.
///
/// The expiry timestamp is the *physical* date printed on the item, not a
/// computed shelf-life estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct GroceryEntity {
    /// Unique numeric identifier.
    pub id: i64,

    /// Display name (e.g., "Milk").
    pub name: String,

    /// Optional free-text description or category label.
    pub description: Option<String>,

    /// Expiry date printed on the item.
    #[ts(as = "String")]
    pub physical_expire_date: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refrigerator_serializes_camel_case() {
        let fridge = Refrigerator {
            id: 7,
            name: "Kitchen".to_string(),
            address: Some("123 Main Street".to_string()),
        };
        let json = serde_json::to_value(&fridge).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["name"], "Kitchen");
        assert_eq!(json["address"], "123 Main Street");
    }

    #[test]
    fn test_grocery_entity_round_trips() {
        let grocery = GroceryEntity {
            id: 42,
            name: "Milk".to_string(),
            description: None,
            physical_expire_date: Utc::now(),
        };
        let json = serde_json::to_string(&grocery).unwrap();
        assert!(json.contains("physicalExpireDate"));
        let back: GroceryEntity = serde_json::from_str(&json).unwrap();
        assert_eq!(back, grocery);
    }
}
