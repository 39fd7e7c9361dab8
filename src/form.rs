//! Food Form Validation
//!
//! Raw form input and the checks the add/edit modals run before submitting.

use leptos::prelude::*;
use thiserror::Error;

use food_api::FoodDraft;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Name is required")]
    MissingName,
    #[error("Image must be an http(s) URL")]
    InvalidImage,
    #[error("Price must be a non-negative number")]
    InvalidPrice,
}

/// Raw text from the form inputs
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FoodFields {
    pub image: String,
    pub name: String,
    pub price: String,
    pub description: String,
}

impl FoodFields {
    /// Trim and check every field, producing the draft to submit.
    /// Never sets `id` or `available`; the controller owns those.
    pub fn validate(&self) -> Result<FoodDraft, FieldError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(FieldError::MissingName);
        }

        let image = self.image.trim();
        if !(image.starts_with("http://") || image.starts_with("https://")) {
            return Err(FieldError::InvalidImage);
        }

        let price = normalize_price(&self.price).ok_or(FieldError::InvalidPrice)?;

        Ok(FoodDraft {
            name: Some(name.to_string()),
            image: Some(image.to_string()),
            price: Some(price),
            description: Some(self.description.trim().to_string()),
            ..Default::default()
        })
    }
}

impl From<&FoodDraft> for FoodFields {
    fn from(draft: &FoodDraft) -> Self {
        FoodFields {
            image: draft.image.clone().unwrap_or_default(),
            name: draft.name.clone().unwrap_or_default(),
            price: draft.price.clone().unwrap_or_default(),
            description: draft.description.clone().unwrap_or_default(),
        }
    }
}

/// Form values for the record being edited.
///
/// Memoized: only a real change to the record reaches the form, so
/// unrelated store writes cannot reset what the user has typed.
pub fn editing_fields(editing_food: Signal<FoodDraft>) -> Memo<FoodFields> {
    Memo::new(move |_| FoodFields::from(&editing_food.get()))
}

/// "19,9" -> "19.90"; None for anything that isn't a finite, non-negative number
fn normalize_price(raw: &str) -> Option<String> {
    let value: f64 = raw.trim().replace(',', ".").parse().ok()?;
    if !value.is_finite() || value < 0.0 {
        return None;
    }
    Some(format!("{:.2}", value))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields() -> FoodFields {
        FoodFields {
            image: " https://example.com/ao-molho.png ".to_string(),
            name: "  Ao molho ".to_string(),
            price: "19,9".to_string(),
            description: " Macarrão ao molho branco ".to_string(),
        }
    }

    #[test]
    fn test_validate_trims_and_normalizes() {
        let draft = fields().validate().expect("valid form");
        assert_eq!(draft.name.as_deref(), Some("Ao molho"));
        assert_eq!(draft.image.as_deref(), Some("https://example.com/ao-molho.png"));
        assert_eq!(draft.price.as_deref(), Some("19.90"));
        assert_eq!(draft.description.as_deref(), Some("Macarrão ao molho branco"));
        assert_eq!(draft.id, None);
        assert_eq!(draft.available, None);
    }

    #[test]
    fn test_missing_name() {
        let form = FoodFields { name: "   ".to_string(), ..fields() };
        assert_eq!(form.validate(), Err(FieldError::MissingName));
    }

    #[test]
    fn test_image_must_be_http() {
        let form = FoodFields { image: "ftp://example.com/a.png".to_string(), ..fields() };
        assert_eq!(form.validate(), Err(FieldError::InvalidImage));

        let form = FoodFields { image: String::new(), ..fields() };
        assert_eq!(form.validate(), Err(FieldError::InvalidImage));
    }

    #[test]
    fn test_bad_prices_rejected() {
        for price in ["", "abc", "-1", "NaN", "inf"] {
            let form = FoodFields { price: price.to_string(), ..fields() };
            assert_eq!(form.validate(), Err(FieldError::InvalidPrice), "price {:?}", price);
        }
    }

    #[test]
    fn test_empty_description_allowed() {
        let form = FoodFields { description: String::new(), ..fields() };
        let draft = form.validate().unwrap();
        assert_eq!(draft.description.as_deref(), Some(""));
    }

    #[test]
    fn test_prefill_from_draft() {
        let draft = FoodDraft {
            id: Some(5),
            name: Some("Veggie".to_string()),
            price: Some("21.90".to_string()),
            ..Default::default()
        };
        let form = FoodFields::from(&draft);
        assert_eq!(form.name, "Veggie");
        assert_eq!(form.price, "21.90");
        assert!(form.image.is_empty());
    }
}
