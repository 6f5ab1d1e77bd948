//! Character Roster App
//!
//! Top-level component: starts the acquisition and switches between the
//! loading, error and ready views.

use leptos::prelude::*;
use reactive_stores::Store;

use roster_core::{LoadState, RosterConfig};

use crate::components::{CharacterDetailPanel, CharacterTable, FilterBar, PageSizeSelector, PaginationControls};
use crate::store::{store_load_roster, use_roster_store, RosterState, RosterStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(RosterState::new(RosterConfig::default()));
    provide_context(store);

    // Load once on mount
    Effect::new(move |_| store_load_roster(store));

    // Memo so filter/page changes don't rebuild the whole tree
    let load_state = Memo::new(move |_| store.roster().read().load_state().clone());

    view! {
        <div class="container">
            {move || match load_state.get() {
                LoadState::Errored(message) => view! {
                    <div class="load-error">"Failed to load characters: " {message}</div>
                }.into_any(),
                LoadState::Ready => view! { <RosterView /> }.into_any(),
                LoadState::Idle | LoadState::Loading => view! {
                    <div class="loading">"Loading..."</div>
                }.into_any(),
            }}
        </div>
    }
}

/// Filters, table, pagination and detail panel
#[component]
fn RosterView() -> impl IntoView {
    let store = use_roster_store();
    let matched = Memo::new(move |_| store.roster().read().filtered_len());

    view! {
        <h1>"Rick and Morty Characters"</h1>
        <FilterBar />
        <PageSizeSelector />
        <Show
            when=move || { matched.get() > 0 }
            fallback=|| view! { <div class="empty">"No characters match the current filters."</div> }
        >
            <CharacterTable />
            <PaginationControls />
        </Show>
        <CharacterDetailPanel />
    }
}
