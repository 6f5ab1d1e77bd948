//! Option Select Component
//!
//! Dropdown with an empty "no constraint" entry followed by the given values.

use leptos::prelude::*;

/// Select for a categorical filter. Choosing the first entry reports `""`.
#[component]
pub fn OptionSelect(
    #[prop(into)] placeholder: String,
    options: Memo<Vec<String>>,
    #[prop(into)] on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <select
            class="filter-select"
            on:change=move |ev| on_change.run(event_target_value(&ev))
        >
            <option value="">{placeholder}</option>
            <For
                each=move || options.get()
                key=|value| value.clone()
                children=move |value| {
                    let label = value.clone();
                    view! { <option value=value>{label}</option> }
                }
            />
        </select>
    }
}
