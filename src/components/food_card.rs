//! Food Card Component
//!
//! One entry of the food list.

use leptos::prelude::*;

use food_api::{FoodId, FoodItem};

use crate::components::DeleteFoodButton;

/// Card for a single food
///
/// Edit hands back the full record, delete only the id. The switch shows
/// `available` from the store and only changes once the server agrees.
#[component]
pub fn FoodCard(
    food: FoodItem,
    #[prop(into)] available: Signal<bool>,
    #[prop(into)] on_delete: Callback<FoodId>,
    #[prop(into)] on_edit: Callback<FoodItem>,
    #[prop(into)] on_toggle_available: Callback<FoodItem>,
) -> impl IntoView {
    let id = food.id;
    let for_edit = food.clone();
    let for_toggle = food.clone();

    view! {
        <div
            class=move || if available.get() { "food-card" } else { "food-card unavailable" }
            data-testid=format!("food-{}", id)
        >
            <header class="food-image">
                <img src=food.image.clone() alt=food.name.clone() />
            </header>

            <section class="food-body">
                <h2>{food.name.clone()}</h2>
                <p>{food.description.clone()}</p>
                <p class="price">"R$ " <b>{food.price.clone()}</b></p>
            </section>

            <section class="food-footer">
                <div class="icon-container">
                    <button
                        type="button"
                        class="icon edit-btn"
                        title="Edit"
                        data-testid=format!("edit-food-{}", id)
                        on:click=move |_| on_edit.run(for_edit.clone())
                    >
                        "✎"
                    </button>
                    <DeleteFoodButton
                        food_name=food.name.clone()
                        on_delete=move |_| on_delete.run(id)
                    />
                </div>

                <div class="availability-container">
                    <p>{move || if available.get() { "Available" } else { "Unavailable" }}</p>
                    <label class="switch">
                        <input
                            type="checkbox"
                            prop:checked=move || available.get()
                            on:click=move |ev| {
                                ev.prevent_default();
                                on_toggle_available.run(for_toggle.clone());
                            }
                        />
                        <span class="slider"></span>
                    </label>
                </div>
            </section>
        </div>
    }
}
