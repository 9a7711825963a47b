//! Footer component

use chrono::Datelike;
use leptos::*;

use crate::APP_NAME;

#[component]
pub fn Footer() -> impl IntoView {
    let year = chrono::Local::now().year();

    view! {
        <footer>
            <div>"Copyright © " {year} " " {APP_NAME} " • Powered by " <span class="rust-badge">"🦀 Rust + Leptos"</span></div>
            <div class="footer-links">
                <a href="#" class="footer-link">"Blog"</a>
                <a href="#" class="footer-link">"Contact"</a>
            </div>
        </footer>
    }
}
