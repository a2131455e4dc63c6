//! Image picker, preview and analyze button.

use leptos::*;
use web_sys::{Event, File};

use crate::state::AnalysisState;

#[component]
pub fn UploadPanel(
    state: ReadSignal<AnalysisState<File>>,
    /// Fired when the file input changes
    #[prop(into)]
    on_select: Callback<Event>,
    /// Fired when the analyze button is clicked
    #[prop(into)]
    on_analyze: Callback<()>,
) -> impl IntoView {
    let busy = move || state.with(|s| s.busy);
    let can_submit = move || state.with(|s| s.can_submit());

    view! {
        <div class="upload-section">
            <input
                type="file"
                id="file-upload"
                accept="image/*"
                style="display:none"
                disabled=busy
                on:change=move |ev| on_select.call(ev)
            />
            <label
                for="file-upload"
                class="upload-button"
                class:disabled=busy
            >
                "Upload X-Ray Image"
            </label>

            {move || {
                state
                    .with(|s| s.preview_url.clone())
                    .map(|src| view! {
                        <div class="preview-frame">
                            <img src=src alt="X-Ray Preview" class="preview-image"/>
                        </div>
                    })
            }}

            <button
                class="analyze-button"
                disabled=move || !can_submit()
                on:click=move |_| on_analyze.call(())
            >
                {move || if busy() { "Analyzing..." } else { "Analyze Image" }}
            </button>
        </div>
    }
}

/// Failure message of the last analysis.
#[component]
pub fn ErrorBanner(message: String) -> impl IntoView {
    view! {
        <div class="error-message">
            <span class="error-dot"></span>
            <p>{message}</p>
        </div>
    }
}
