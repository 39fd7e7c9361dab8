//! Dashboard State Store
//!
//! Page state plus its transitions. The transitions are plain methods so
//! they stay testable off the browser; `AppStore` wraps the state in a
//! reactive_stores `Store` for field-level reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use food_api::{Entity, FoodDraft, FoodId, FoodItem};

/// Everything the dashboard page holds in memory
#[derive(Clone, Debug, Default, Store)]
pub struct DashboardState {
    /// Add-food modal visibility
    pub modal_open: bool,
    /// Edit-food modal visibility
    pub edit_modal_open: bool,
    /// Foods in display order (server order, new ones appended)
    pub foods: Vec<FoodItem>,
    /// Record currently being edited; empty until an edit starts
    pub editing_food: FoodDraft,
}

impl DashboardState {
    pub fn replace_foods(&mut self, foods: Vec<FoodItem>) {
        self.foods = foods;
    }

    pub fn push_food(&mut self, food: FoodItem) {
        self.foods.push(food);
    }

    /// Swap in a fresh copy of an existing food; unknown ids are ignored
    pub fn replace_food(&mut self, food: FoodItem) {
        replace_by_id(&mut self.foods, food);
    }

    pub fn remove_food(&mut self, id: FoodId) {
        remove_by_id(&mut self.foods, id);
    }

    pub fn toggle_modal(&mut self) {
        self.modal_open = !self.modal_open;
    }

    pub fn toggle_edit_modal(&mut self) {
        self.edit_modal_open = !self.edit_modal_open;
    }

    /// Remember which food is being edited and show the edit modal
    pub fn begin_edit(&mut self, food: FoodItem) {
        self.editing_food = FoodDraft::from(food);
        self.edit_modal_open = true;
    }
}

fn replace_by_id<T: Entity>(list: &mut [T], updated: T) {
    if let Some(slot) = list.iter_mut().find(|item| item.id() == updated.id()) {
        *slot = updated;
    }
}

fn remove_by_id<T: Entity>(list: &mut Vec<T>, id: T::Id) {
    list.retain(|item| item.id() != id);
}

/// Type alias for the store
pub type AppStore = Store<DashboardState>;

/// Availability of one food as the store currently has it
pub fn food_available(store: AppStore, id: FoodId) -> Signal<bool> {
    Signal::derive(move || store.foods().with(|foods| foods.iter().any(|f| f.id == id && f.available)))
}

/// Read/write access to the dashboard state.
///
/// Lets the controller run against the reactive store in the browser and
/// against a plain cell in tests.
pub trait StateHandle {
    fn read_state<R>(&self, f: impl FnOnce(&DashboardState) -> R) -> R;

    fn update_state(&self, f: impl FnOnce(&mut DashboardState));
}

impl StateHandle for AppStore {
    fn read_state<R>(&self, f: impl FnOnce(&DashboardState) -> R) -> R {
        f(&*self.read_untracked())
    }

    /// Applies the transition to a copy and writes back only the fields
    /// that changed, so readers of untouched fields are not notified.
    fn update_state(&self, f: impl FnOnce(&mut DashboardState)) {
        let mut next = (*self.read_untracked()).clone();
        f(&mut next);
        let DashboardState { modal_open, edit_modal_open, foods, editing_food } = next;

        if self.modal_open().get_untracked() != modal_open {
            *self.modal_open().write() = modal_open;
        }
        if self.edit_modal_open().get_untracked() != edit_modal_open {
            *self.edit_modal_open().write() = edit_modal_open;
        }
        if self.foods().with_untracked(|current| *current != foods) {
            *self.foods().write() = foods;
        }
        if self.editing_food().with_untracked(|current| *current != editing_food) {
            *self.editing_food().write() = editing_food;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn food(id: FoodId, name: &str) -> FoodItem {
        FoodItem {
            id,
            name: name.to_string(),
            image: format!("https://example.com/{}.png", id),
            price: "12.50".to_string(),
            description: String::new(),
            available: true,
        }
    }

    fn loaded() -> DashboardState {
        let mut state = DashboardState::default();
        state.replace_foods(vec![food(1, "Ao molho"), food(2, "Veggie"), food(3, "A la Camarón")]);
        state
    }

    fn ids(state: &DashboardState) -> Vec<FoodId> {
        state.foods.iter().map(|f| f.id).collect()
    }

    #[test]
    fn test_replace_foods_keeps_response_order() {
        let state = loaded();
        assert_eq!(ids(&state), vec![1, 2, 3]);
    }

    #[test]
    fn test_push_food_appends() {
        let mut state = loaded();
        state.push_food(food(9, "Pizza"));
        assert_eq!(ids(&state), vec![1, 2, 3, 9]);
    }

    #[test]
    fn test_replace_food_touches_only_match() {
        let mut state = loaded();
        let mut renamed = food(2, "Veggie especial");
        renamed.available = false;

        state.replace_food(renamed.clone());

        assert_eq!(state.foods.len(), 3);
        assert_eq!(state.foods[1], renamed);
        assert_eq!(state.foods[0], food(1, "Ao molho"));
        assert_eq!(state.foods[2], food(3, "A la Camarón"));
    }

    #[test]
    fn test_replace_unknown_food_is_noop() {
        let mut state = loaded();
        state.replace_food(food(42, "Ghost"));
        assert_eq!(ids(&state), vec![1, 2, 3]);
    }

    #[test]
    fn test_remove_food_removes_only_match() {
        let mut state = loaded();
        state.remove_food(2);
        assert_eq!(ids(&state), vec![1, 3]);

        state.remove_food(42);
        assert_eq!(ids(&state), vec![1, 3]);
    }

    #[test]
    fn test_modal_toggles_are_independent() {
        let mut state = DashboardState::default();

        state.toggle_modal();
        assert!(state.modal_open);
        assert!(!state.edit_modal_open);

        state.toggle_edit_modal();
        assert!(state.modal_open);
        assert!(state.edit_modal_open);

        state.toggle_modal();
        assert!(!state.modal_open);
        assert!(state.edit_modal_open);
    }

    #[test]
    fn test_begin_edit_captures_record() {
        let mut state = loaded();
        let before = state.foods.clone();

        state.begin_edit(food(3, "A la Camarón"));

        assert_eq!(state.editing_food, FoodDraft::from(food(3, "A la Camarón")));
        assert!(state.edit_modal_open);
        assert!(!state.modal_open);
        assert_eq!(state.foods, before);
    }
}
