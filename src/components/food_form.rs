//! Food Form Component
//!
//! Controlled inputs shared by the add and edit modals. Validates locally
//! and only hands valid drafts to `on_submit`.

use leptos::prelude::*;

use food_api::FoodDraft;

use crate::form::{FieldError, FoodFields};

#[component]
pub fn FoodForm(
    /// Values to start from; re-applied whenever this changes
    #[prop(into)]
    initial: Signal<FoodFields>,
    #[prop(into)] submit_label: String,
    #[prop(into)] on_submit: Callback<FoodDraft>,
) -> impl IntoView {
    let fields = RwSignal::new(initial.get_untracked());
    let (error, set_error) = signal::<Option<FieldError>>(None);

    Effect::new(move |_| {
        fields.set(initial.get());
        set_error.set(None);
    });

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        match fields.with_untracked(|f| f.validate()) {
            Ok(draft) => {
                set_error.set(None);
                on_submit.run(draft);
            }
            Err(e) => {
                log::debug!("[FORM] Rejected food form: {}", e);
                set_error.set(Some(e));
            }
        }
    };

    view! {
        <form class="food-form" on:submit=submit>
            <input
                type="text"
                name="image"
                placeholder="Paste the image link here"
                prop:value=move || fields.with(|f| f.image.clone())
                on:input=move |ev| fields.update(|f| f.image = event_target_value(&ev))
            />
            <input
                type="text"
                name="name"
                placeholder="Ex: Moda Italiana"
                prop:value=move || fields.with(|f| f.name.clone())
                on:input=move |ev| fields.update(|f| f.name = event_target_value(&ev))
            />
            <input
                type="text"
                name="price"
                placeholder="Ex: 19.90"
                prop:value=move || fields.with(|f| f.price.clone())
                on:input=move |ev| fields.update(|f| f.price = event_target_value(&ev))
            />
            <textarea
                name="description"
                placeholder="Description"
                prop:value=move || fields.with(|f| f.description.clone())
                on:input=move |ev| fields.update(|f| f.description = event_target_value(&ev))
            ></textarea>

            {move || error.get().map(|e| view! { <p class="form-error">{e.to_string()}</p> })}

            <button type="submit" class="submit-btn" data-testid="submit-food">
                <span class="text">{submit_label}</span>
                <span class="icon">"✓"</span>
            </button>
        </form>
    }
}
