//! Hero section component

use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1 class="hero-title">"TB Vision X-AI"</h1>
            <p class="hero-subtitle">"Advanced Tuberculosis Detection using Explainable AI"</p>
        </div>
    }
}
