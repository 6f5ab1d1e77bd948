//! Page Size Selector Component

use leptos::prelude::*;

use roster_core::PageSize;

use crate::store::{use_roster_store, RosterStateStoreFields};

#[component]
pub fn PageSizeSelector() -> impl IntoView {
    let store = use_roster_store();
    let current = Memo::new(move |_| store.roster().read().page_size());

    let on_change = move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        match value.parse::<usize>().ok().and_then(|n| PageSize::try_from(n).ok()) {
            Some(size) => store.roster().write().set_page_size(size),
            None => log::warn!("[PAGE] Ignoring page size {:?}", value),
        }
    };

    view! {
        <div class="page-size">
            <select prop:value=move || current.get().to_string() on:change=on_change>
                {PageSize::all().map(|size| {
                    view! {
                        <option value=size.to_string()>{format!("Show {} results", size)}</option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}
