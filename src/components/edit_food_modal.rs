//! Edit Food Modal Component

use leptos::prelude::*;

use food_api::FoodDraft;

use crate::components::{FoodForm, Modal};
use crate::form::editing_fields;

/// Modal for editing `editing_food`, pre-filled with its current values
#[component]
pub fn EditFoodModal(
    #[prop(into)] is_open: Signal<bool>,
    #[prop(into)] set_is_open: Callback<()>,
    #[prop(into)] editing_food: Signal<FoodDraft>,
    #[prop(into)] on_update_food: Callback<FoodDraft>,
) -> impl IntoView {
    let submit = Callback::new(move |food: FoodDraft| {
        on_update_food.run(food);
        set_is_open.run(());
    });

    view! {
        <Modal is_open=is_open on_close=set_is_open>
            <h1>"Edit dish"</h1>
            <FoodForm
                initial=editing_fields(editing_food)
                submit_label="Save changes"
                on_submit=submit
            />
        </Modal>
    }
}
