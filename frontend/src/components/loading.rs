use leptos::*;

/// Spinner with the current rotating status line.
#[component]
pub fn LoadingIndicator(message: Signal<&'static str>) -> impl IntoView {
    view! {
        <div class="loading-section">
            <div class="spinner"></div>
            <p class="loading-message">{move || message.get()}</p>
        </div>
    }
}
