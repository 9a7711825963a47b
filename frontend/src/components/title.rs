//! Section caption

use leptos::*;

#[component]
pub fn SectionTitle(#[prop(into)] title: String) -> impl IntoView {
    view! {
        <div class="text-center">
            <h2 class="section-title">{title}</h2>
        </div>
    }
}
