//! Character Detail Component
//!
//! Panel for the selected character, including origin and last location.

use leptos::prelude::*;

use crate::store::{use_roster_store, RosterStateStoreFields};

#[component]
pub fn CharacterDetailPanel() -> impl IntoView {
    let store = use_roster_store();
    let detail = Memo::new(move |_| store.roster().read().selected_detail());

    move || {
        detail.get().map(|d| {
            let kind = if d.kind.is_empty() { "-".to_string() } else { d.kind.clone() };
            view! {
                <div class="character-detail">
                    <div class="detail-header">
                        <h2>"Character Details"</h2>
                        <button class="close-btn" on:click=move |_| store.roster().write().clear_selection()>
                            "×"
                        </button>
                    </div>
                    <div class="detail-body">
                        <img class="detail-image" src=d.image.clone() alt=d.name.clone() />
                        <div>
                            <p><strong>"Name: "</strong>{d.name.clone()}</p>
                            <p><strong>"Status: "</strong>{d.status.clone()}</p>
                            <p><strong>"Species: "</strong>{d.species.clone()}</p>
                            <p><strong>"Type: "</strong>{kind}</p>
                            <p><strong>"Gender: "</strong>{d.gender.clone()}</p>
                            <p><strong>"Location: "</strong>{d.location.clone()}</p>
                            <p><strong>"Origin: "</strong>{d.origin.clone()}</p>
                            <p><strong>"Episodes: "</strong>{d.episode_count}</p>
                        </div>
                    </div>
                </div>
            }
        })
    }
}
