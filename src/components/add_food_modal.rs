//! Add Food Modal Component

use leptos::prelude::*;

use food_api::FoodDraft;

use crate::components::{FoodForm, Modal};
use crate::form::FoodFields;

/// Modal for creating a new food. Closes itself after a valid submit.
#[component]
pub fn AddFoodModal(
    #[prop(into)] is_open: Signal<bool>,
    #[prop(into)] set_is_open: Callback<()>,
    #[prop(into)] on_add_food: Callback<FoodDraft>,
) -> impl IntoView {
    let submit = Callback::new(move |food: FoodDraft| {
        on_add_food.run(food);
        set_is_open.run(());
    });

    view! {
        <Modal is_open=is_open on_close=set_is_open>
            <h1>"New dish"</h1>
            <FoodForm
                initial=Signal::derive(FoodFields::default)
                submit_label="Add dish"
                on_submit=submit
            />
        </Modal>
    }
}
