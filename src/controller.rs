//! Dashboard Controller
//!
//! Mediates between the presentation components and the food API. Every
//! failure is logged and swallowed; the page never surfaces API errors.

use food_api::{FoodApi, FoodDraft, FoodId, FoodItem};

use crate::store::StateHandle;

#[derive(Clone)]
pub struct DashboardController<A, S> {
    api: A,
    state: S,
}

impl<A: FoodApi, S: StateHandle> DashboardController<A, S> {
    pub fn new(api: A, state: S) -> Self {
        Self { api, state }
    }

    /// Initial load: replace the list with whatever the server has
    pub async fn load_foods(&self) {
        match self.api.list_foods().await {
            Ok(foods) => {
                log::info!("[DASHBOARD] Loaded {} foods", foods.len());
                self.state.update_state(|s| s.replace_foods(foods));
            }
            Err(e) => log::warn!("[DASHBOARD] Failed to load foods: {}", e),
        }
    }

    /// Create a food from the add form. New foods always start available.
    pub async fn add_food(&self, food: FoodDraft) {
        let payload = food.with_available(true);
        match self.api.create_food(&payload).await {
            Ok(created) => {
                log::info!("[DASHBOARD] Created food {}", created.id);
                self.state.update_state(|s| s.push_food(created));
            }
            Err(e) => log::error!("[DASHBOARD] Failed to create food: {}", e),
        }
    }

    /// Save the edit form on top of the record being edited
    pub async fn update_food(&self, food: FoodDraft) {
        let editing = self.state.read_state(|s| s.editing_food.clone());
        let Some(id) = editing.id else {
            log::warn!("[DASHBOARD] Update submitted with no food being edited");
            return;
        };

        let merged = editing.merge(food);
        match self.api.update_food(id, &merged).await {
            Ok(updated) => {
                log::info!("[DASHBOARD] Updated food {}", updated.id);
                self.state.update_state(|s| s.replace_food(updated));
            }
            Err(e) => log::error!("[DASHBOARD] Failed to update food {}: {}", id, e),
        }
    }

    /// Delete on the server, then drop the food locally whatever the outcome
    pub async fn delete_food(&self, id: FoodId) {
        if let Err(e) = self.api.delete_food(id).await {
            log::warn!("[DASHBOARD] Delete of food {} failed, removing locally anyway: {}", id, e);
        }
        self.state.update_state(|s| s.remove_food(id));
    }

    /// Flip availability of a single food card
    pub async fn toggle_available(&self, food: FoodItem) {
        let id = food.id;
        let available = !food.available;
        let payload = FoodDraft::from(food).with_available(available);
        match self.api.update_food(id, &payload).await {
            Ok(updated) => self.state.update_state(|s| s.replace_food(updated)),
            Err(e) => log::error!("[DASHBOARD] Failed to set availability of food {}: {}", id, e),
        }
    }

    pub fn toggle_modal(&self) {
        self.state.update_state(|s| s.toggle_modal());
    }

    pub fn toggle_edit_modal(&self) {
        self.state.update_state(|s| s.toggle_edit_modal());
    }

    /// Edit intent from a food card
    pub fn edit_food(&self, food: FoodItem) {
        self.state.update_state(|s| s.begin_edit(food));
    }
}
