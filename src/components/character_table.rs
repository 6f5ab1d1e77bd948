//! Character Table Component
//!
//! Rows for the current page. Clicking a row selects that character.

use leptos::prelude::*;

use roster_core::Character;

use crate::store::{use_roster_store, RosterStateStoreFields};

#[component]
pub fn CharacterTable() -> impl IntoView {
    let store = use_roster_store();

    let rows = Memo::new(move |_| store.roster().read().page_items().cloned().collect::<Vec<Character>>());
    let selected = Memo::new(move |_| store.roster().read().selected_id());

    view! {
        <table class="character-table">
            <thead>
                <tr>
                    <th>"Image"</th>
                    <th>"Name"</th>
                    <th>"Status"</th>
                    <th>"Species"</th>
                    <th>"Gender"</th>
                </tr>
            </thead>
            <tbody>
                <For
                    each=move || rows.get()
                    key=|character| character.id
                    children=move |character| {
                        let id = character.id;
                        let is_selected = move || selected.get() == Some(id);
                        view! {
                            <tr
                                class="character-row"
                                class:selected=is_selected
                                on:click=move |_| {
                                    store.roster().write().select(id);
                                }
                            >
                                <td class="avatar-cell">
                                    <img class="avatar" src=character.image.clone() alt=character.name.clone() />
                                </td>
                                <td>{character.name.clone()}</td>
                                <td>{character.status.clone()}</td>
                                <td>{character.species.clone()}</td>
                                <td>{character.gender.clone()}</td>
                            </tr>
                        }
                    }
                />
            </tbody>
        </table>
    }
}
