//! Pagination Controls Component
//!
//! Previous/next buttons around a "Page X / Y" indicator. Buttons are
//! disabled at the boundaries.

use leptos::prelude::*;

use roster_core::PageDirection;

use crate::store::{use_roster_store, RosterStateStoreFields};

#[component]
pub fn PaginationControls() -> impl IntoView {
    let store = use_roster_store();
    let summary = Memo::new(move |_| store.roster().read().summary());
    let can_previous = Memo::new(move |_| store.roster().read().can_step(PageDirection::Previous));
    let can_next = Memo::new(move |_| store.roster().read().can_step(PageDirection::Next));

    let step = move |direction: PageDirection| {
        if !store.roster().write().step_page(direction) {
            log::debug!("[PAGE] {:?} ignored at boundary", direction);
        }
    };

    view! {
        <div class="pagination">
            <button
                class="page-btn"
                disabled=move || !can_previous.get()
                on:click=move |_| step(PageDirection::Previous)
            >
                "Previous"
            </button>
            <span class="page-indicator">
                {move || {
                    let s = summary.get();
                    format!("Page {} / {} ({} of {} characters)", s.current_page, s.total_pages, s.matched, s.total)
                }}
            </span>
            <button
                class="page-btn"
                disabled=move || !can_next.get()
                on:click=move |_| step(PageDirection::Next)
            >
                "Next"
            </button>
        </div>
    }
}
