//! Header Component

use leptos::prelude::*;

/// Page header with the "new dish" action
#[component]
pub fn Header(#[prop(into)] open_modal: Callback<()>) -> impl IntoView {
    view! {
        <header class="dashboard-header">
            <div class="header-content">
                <span class="header-logo">"GoRestaurant"</span>
                <nav>
                    <button
                        type="button"
                        class="new-food-btn"
                        on:click=move |_| open_modal.run(())
                    >
                        <span class="text">"New dish"</span>
                        <span class="icon">"+"</span>
                    </button>
                </nav>
            </div>
        </header>
    }
}
