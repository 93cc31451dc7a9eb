//! Counter Card Component
//!
//! Local click counter, independent of the backend.

use leptos::prelude::*;

use crate::config::{COUNTER_FOOTNOTE, COUNTER_HINT};

/// Click count. Only ever goes up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counter(u64);

impl Counter {
    #[cfg(test)]
    pub fn value(self) -> u64 {
        self.0
    }

    pub fn increment(&mut self) {
        self.0 = self.0.saturating_add(1);
    }

    pub fn label(self) -> String {
        format!("Count: {}", self.0)
    }
}

/// HMR Test card with the counter button
#[component]
pub fn CounterCard(
    count: ReadSignal<Counter>,
    set_count: WriteSignal<Counter>,
) -> impl IntoView {
    view! {
        <div class="card">
            <h2>"HMR Test"</h2>
            <p>{COUNTER_HINT}</p>
            <button on:click=move |_| set_count.update(Counter::increment)>
                {move || count.get().label()}
            </button>
            <p class="hint">{COUNTER_FOOTNOTE}</p>
        </div>
    }
}
