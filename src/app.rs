//! Food Dashboard App
//!
//! The dashboard page: owns the state store, loads foods on mount and wires
//! controller actions into the child components.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use food_api::{ApiConfig, FoodDraft, FoodId, FoodItem, RestClient};

use crate::components::{AddFoodModal, EditFoodModal, FoodCard, Header};
use crate::controller::DashboardController;
use crate::store::{food_available, AppStore, DashboardState, DashboardStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    // State lives as long as the page is mounted
    let store: AppStore = Store::new(DashboardState::default());

    let config = ApiConfig::default();
    log::info!("[APP] Food API at {}", config.base_url());
    let controller = StoredValue::new_local(DashboardController::new(RestClient::new(config), store));

    // Load foods on mount
    Effect::new(move |_| {
        let ctrl = controller.get_value();
        spawn_local(async move {
            ctrl.load_foods().await;
        });
    });

    let toggle_modal = Callback::new(move |_: ()| controller.with_value(|c| c.toggle_modal()));
    let toggle_edit_modal = Callback::new(move |_: ()| controller.with_value(|c| c.toggle_edit_modal()));
    let handle_edit_food = Callback::new(move |food: FoodItem| controller.with_value(|c| c.edit_food(food)));

    let handle_add_food = Callback::new(move |food: FoodDraft| {
        let ctrl = controller.get_value();
        spawn_local(async move {
            ctrl.add_food(food).await;
        });
    });

    let handle_update_food = Callback::new(move |food: FoodDraft| {
        let ctrl = controller.get_value();
        spawn_local(async move {
            ctrl.update_food(food).await;
        });
    });

    let handle_delete_food = Callback::new(move |id: FoodId| {
        let ctrl = controller.get_value();
        spawn_local(async move {
            ctrl.delete_food(id).await;
        });
    });

    let handle_toggle_available = Callback::new(move |food: FoodItem| {
        let ctrl = controller.get_value();
        spawn_local(async move {
            ctrl.toggle_available(food).await;
        });
    });

    view! {
        <Header open_modal=toggle_modal />

        <AddFoodModal
            is_open=Signal::derive(move || store.modal_open().get())
            set_is_open=toggle_modal
            on_add_food=handle_add_food
        />

        <EditFoodModal
            is_open=Signal::derive(move || store.edit_modal_open().get())
            set_is_open=toggle_edit_modal
            editing_food=Signal::derive(move || store.editing_food().get())
            on_update_food=handle_update_food
        />

        <div class="foods-container" data-testid="foods-list">
            <For
                each=move || store.foods().get()
                // Whole record as key so an updated food re-renders its card
                key=|food| food.clone()
                children=move |food| {
                    view! {
                        <FoodCard
                            available=food_available(store, food.id)
                            food=food
                            on_delete=handle_delete_food
                            on_edit=handle_edit_food
                            on_toggle_available=handle_toggle_available
                        />
                    }
                }
            />
        </div>
    }
}
