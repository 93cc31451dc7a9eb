//! Connection Card Component
//!
//! Shows the outcome of the greeting fetch.

use leptos::prelude::*;

use crate::status::{ConnectionStatus, StatusDisplay};

/// Backend Connection card
#[component]
pub fn ConnectionCard(status: ReadSignal<ConnectionStatus>) -> impl IntoView {
    view! {
        <div class="card">
            <h2>"Backend Connection"</h2>
            {move || match status.with(ConnectionStatus::display) {
                StatusDisplay::Loading(text) => view! { <p>{text}</p> }.into_any(),
                StatusDisplay::Loaded { message, framework, timestamp } => view! {
                    <div class="api-response">
                        <p class="message">{message}</p>
                        <p class="detail">{framework}</p>
                        <p class="detail">{timestamp}</p>
                    </div>
                }.into_any(),
                StatusDisplay::Failed(text) => view! { <p class="error">{text}</p> }.into_any(),
            }}
        </div>
    }
}
