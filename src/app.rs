//! IceBrew Greeting Page
//!
//! Root component: owns the fetch status and the click counter.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{ConnectionCard, Counter, CounterCard, FeaturesCard, PageFooter, PageHeader};
use crate::mount::MountGuard;
use crate::status::ConnectionStatus;

#[component]
pub fn App() -> impl IntoView {
    // State
    let (status, set_status) = signal(ConnectionStatus::Loading);
    let (count, set_count) = signal(Counter::default());

    // Late responses after unmount must not touch disposed signals
    let guard = MountGuard::new();
    on_cleanup({
        let guard = guard.clone();
        move || guard.release()
    });

    // Fetch the greeting once on mount
    Effect::new(move |_| {
        let guard = guard.clone();
        spawn_local(async move {
            let outcome = api::fetch_greeting().await;
            // try_update skips disposed signals; deliver drops outcomes after unmount
            set_status.try_update(|s| s.deliver(&guard, outcome));
        });
    });

    view! {
        <div class="App">
            <PageHeader />

            <main class="App-main">
                <ConnectionCard status=status />
                <CounterCard count=count set_count=set_count />
                <FeaturesCard />
            </main>

            <PageFooter />
        </div>
    }
}
