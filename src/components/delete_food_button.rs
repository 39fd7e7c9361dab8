//! Delete Food Button Component

use leptos::prelude::*;

/// Trash button on a food card. The first click arms it and asks
/// "Remove <dish>?"; only the confirm button fires `on_delete`.
#[component]
pub fn DeleteFoodButton(
    #[prop(into)] food_name: String,
    #[prop(into)] on_delete: Callback<()>,
) -> impl IntoView {
    let (armed, set_armed) = signal(false);
    let question = format!("Remove {}?", food_name);
    let trash_label = format!("Delete {}", food_name);

    move || {
        if armed.get() {
            view! {
                <span class="delete-food-confirm" role="alertdialog" aria-label=question.clone()>
                    <span class="delete-food-question">{question.clone()}</span>
                    <button
                        type="button"
                        class="delete-food-yes"
                        aria-label="Remove dish"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            set_armed.set(false);
                            on_delete.run(());
                        }
                    >
                        "Remove"
                    </button>
                    <button
                        type="button"
                        class="delete-food-keep"
                        aria-label="Keep dish"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            set_armed.set(false);
                        }
                    >
                        "Keep"
                    </button>
                </span>
            }
            .into_any()
        } else {
            view! {
                <button
                    type="button"
                    class="icon delete-btn"
                    title=trash_label.clone()
                    aria-label=trash_label.clone()
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_armed.set(true);
                    }
                >
                    "🗑"
                </button>
            }
            .into_any()
        }
    }
}
