//! Food Catalog Models
//!
//! Data structures matching the API's JSON entities.

use serde::{Deserialize, Deserializer, Serialize};

pub type FoodId = u32;

/// Anything listed by a unique identifier
pub trait Entity: Clone {
    type Id: Copy + Eq;

    fn id(&self) -> Self::Id;
}

/// A catalog entry as returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FoodItem {
    pub id: FoodId,
    pub name: String,
    /// Image URL
    pub image: String,
    #[serde(deserialize_with = "deserialize_price")]
    pub price: String,
    pub description: String,
    #[serde(default)]
    pub available: bool,
}

impl Entity for FoodItem {
    type Id = FoodId;

    fn id(&self) -> FoodId {
        self.id
    }
}

/// Partial food item: form submissions and the record being edited.
///
/// Unset fields are left out of the JSON body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FoodDraft {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<FoodId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_optional_price"
    )]
    pub price: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available: Option<bool>,
}

impl FoodDraft {
    /// Overlay `other` on top of `self`; fields set in `other` win
    pub fn merge(self, other: FoodDraft) -> FoodDraft {
        FoodDraft {
            id: other.id.or(self.id),
            name: other.name.or(self.name),
            image: other.image.or(self.image),
            price: other.price.or(self.price),
            description: other.description.or(self.description),
            available: other.available.or(self.available),
        }
    }

    pub fn with_available(mut self, available: bool) -> FoodDraft {
        self.available = Some(available);
        self
    }
}

impl From<FoodItem> for FoodDraft {
    fn from(item: FoodItem) -> Self {
        FoodDraft {
            id: Some(item.id),
            name: Some(item.name),
            image: Some(item.image),
            price: Some(item.price),
            description: Some(item.description),
            available: Some(item.available),
        }
    }
}

/// Prices travel as strings ("19.90") but some servers send plain numbers
#[derive(Deserialize)]
#[serde(untagged)]
enum RawPrice {
    Text(String),
    Number(serde_json::Number),
}

impl RawPrice {
    fn into_string(self) -> String {
        match self {
            RawPrice::Text(text) => text,
            RawPrice::Number(number) => number.to_string(),
        }
    }
}

fn deserialize_price<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    RawPrice::deserialize(deserializer).map(RawPrice::into_string)
}

fn deserialize_optional_price<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<RawPrice>::deserialize(deserializer).map(|raw| raw.map(RawPrice::into_string))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn pizza() -> FoodItem {
        FoodItem {
            id: 1,
            name: "Ao molho".to_string(),
            image: "https://example.com/ao-molho.png".to_string(),
            price: "19.90".to_string(),
            description: "Macarrão ao molho branco".to_string(),
            available: true,
        }
    }

    #[test]
    fn test_food_item_accepts_numeric_price() {
        let item: FoodItem = serde_json::from_value(json!({
            "id": 3,
            "name": "Veggie",
            "image": "https://example.com/veggie.png",
            "price": 21.9,
            "description": "Salad",
            "available": false
        }))
        .unwrap();
        assert_eq!(item.price, "21.9");
        assert!(!item.available);
    }

    #[test]
    fn test_food_item_defaults_missing_availability() {
        let item: FoodItem = serde_json::from_value(json!({
            "id": 4,
            "name": "A la Camarón",
            "image": "https://example.com/camarao.png",
            "price": "25.90",
            "description": "Camarão"
        }))
        .unwrap();
        assert!(!item.available);
    }

    #[test]
    fn test_draft_omits_unset_fields() {
        let draft = FoodDraft {
            name: Some("Soup".to_string()),
            ..Default::default()
        };
        assert_eq!(serde_json::to_value(&draft).unwrap(), json!({ "name": "Soup" }));
    }

    #[test]
    fn test_merge_prefers_submitted_fields() {
        let editing = FoodDraft::from(pizza());
        let submitted = FoodDraft {
            name: Some("Ao molho especial".to_string()),
            price: Some("22.00".to_string()),
            ..Default::default()
        };

        let merged = editing.merge(submitted);
        assert_eq!(merged.id, Some(1));
        assert_eq!(merged.name.as_deref(), Some("Ao molho especial"));
        assert_eq!(merged.price.as_deref(), Some("22.00"));
        assert_eq!(merged.image.as_deref(), Some("https://example.com/ao-molho.png"));
        assert_eq!(merged.available, Some(true));
    }

    #[test]
    fn test_with_available_overrides() {
        let draft = FoodDraft::from(pizza()).with_available(false);
        assert_eq!(draft.available, Some(false));
    }
}
