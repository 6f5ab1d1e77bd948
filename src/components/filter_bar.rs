//! Filter Bar Component
//!
//! Name text input plus status and species selectors.

use leptos::prelude::*;

use crate::components::OptionSelect;
use crate::store::{use_roster_store, RosterStateStoreFields};

#[component]
pub fn FilterBar() -> impl IntoView {
    let store = use_roster_store();

    let name = Memo::new(move |_| store.roster().read().filters().name.clone());
    let status_options = Memo::new(move |_| store.roster().read().status_options());
    let species_options = Memo::new(move |_| store.roster().read().species_options());

    view! {
        <div class="filter-bar">
            <input
                type="text"
                class="name-filter"
                placeholder="Filter by name"
                prop:value=move || name.get()
                on:input=move |ev| store.roster().write().set_name_filter(&event_target_value(&ev))
            />
            <OptionSelect
                placeholder="All statuses"
                options=status_options
                on_change=move |status: String| store.roster().write().set_status_filter(&status)
            />
            <OptionSelect
                placeholder="All species"
                options=species_options
                on_change=move |species: String| store.roster().write().set_species_filter(&species)
            />
        </div>
    }
}
