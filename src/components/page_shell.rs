//! Page Shell Components
//!
//! Fixed header and footer around the cards.

use leptos::prelude::*;

use crate::config::{FOOTER, SUBTITLE, TITLE};

#[component]
pub fn PageHeader() -> impl IntoView {
    view! {
        <header class="App-header">
            <h1>{TITLE}</h1>
            <p class="subtitle">{SUBTITLE}</p>
        </header>
    }
}

#[component]
pub fn PageFooter() -> impl IntoView {
    view! {
        <footer class="App-footer">
            <p>{FOOTER}</p>
        </footer>
    }
}
