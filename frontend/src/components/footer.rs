//! Footer component

use leptos::*;

use crate::config::{REPORT_PATH, REPOSITORY_URL};

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer>
            <div>"TB Vision X-AI • Powered by " <span class="rust-badge">"🦀 Rust + Leptos"</span></div>
            <div class="footer-links">
                <a href=REPOSITORY_URL class="footer-link" target="_blank" rel="noopener noreferrer">
                    "GitHub"
                </a>
                <a href=REPORT_PATH class="footer-link" target="_blank" rel="noopener noreferrer">
                    "Research Paper"
                </a>
            </div>
        </footer>
    }
}
