//! UI Components
//!
//! Presentation pieces of the dashboard page.

mod add_food_modal;
mod delete_food_button;
mod edit_food_modal;
mod food_card;
mod food_form;
mod header;
mod modal;

pub use add_food_modal::AddFoodModal;
pub use delete_food_button::DeleteFoodButton;
pub use edit_food_modal::EditFoodModal;
pub use food_card::FoodCard;
pub use food_form::FoodForm;
pub use header::Header;
pub use modal::Modal;
