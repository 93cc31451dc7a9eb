//! Features Card Component

use leptos::prelude::*;

use crate::config::FEATURES;

/// Static feature list
#[component]
pub fn FeaturesCard() -> impl IntoView {
    view! {
        <div class="card">
            <h2>"Features"</h2>
            <ul class="features">
                {FEATURES.iter().map(|feature| view! { <li>{*feature}</li> }).collect_view()}
            </ul>
        </div>
    }
}
