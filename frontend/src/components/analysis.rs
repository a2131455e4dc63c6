//! Analysis page: owns the [`AnalysisState`] and every side effect.
//!
//! The page is the single controller of the analysis view. Child components
//! only read the state and report user intent back through callbacks.

use gloo_timers::callback::Interval;
use leptos::*;
use leptos_meta::Title;
use leptos_router::A;
use web_sys::{Event, File, HtmlInputElement, Url};

use crate::components::{ErrorBanner, Footer, LoadingIndicator, ResultsPanel, UploadPanel};
use crate::config::LOADING_TICK_MS;
use crate::services::predict;
use crate::state::{run_submission, Action, AnalysisState};

#[component]
pub fn AnalysisPage() -> impl IntoView {
    let state = create_rw_signal(AnalysisState::<File>::default());
    let busy = create_memo(move |_| state.with(|s| s.busy));

    // Loading messages only rotate while a request is in flight. The
    // interval is dropped (and cleared) whenever `busy` flips back or the
    // page is disposed.
    create_effect(move |_| {
        if busy.get() {
            let ticker = Interval::new(LOADING_TICK_MS, move || {
                let _ = state.try_update(|s| *s = s.apply(Action::Tick));
            });
            on_cleanup(move || drop(ticker));
        }
    });

    on_cleanup(move || {
        if let Some(url) = state.try_with_untracked(|s| s.preview_url.clone()).flatten() {
            revoke_preview(&url);
        }
    });

    let on_select = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };

        let preview_url = match Url::create_object_url_with_blob(&file) {
            Ok(url) => url,
            Err(e) => {
                log::error!("❌ Could not preview {}: {:?}", file.name(), e);
                return;
            }
        };

        log::info!("🩻 Selected {} ({} bytes)", file.name(), file.size());
        let previous = state.with_untracked(|s| s.preview_url.clone());
        state.update(|s| {
            *s = s.apply(Action::Select {
                file,
                preview_url: preview_url.clone(),
            })
        });

        let accepted = state.with_untracked(|s| s.preview_url.as_deref() == Some(preview_url.as_str()));
        if accepted {
            if let Some(old) = previous {
                revoke_preview(&old);
            }
        } else {
            revoke_preview(&preview_url);
        }
    };

    let on_analyze = move |_: ()| {
        let current = state.get_untracked();
        if !current.can_submit() {
            log::debug!("Analyze ignored: no image selected or request in flight");
            return;
        }

        spawn_local(async move {
            let submitted = run_submission(&current, predict, |action| {
                state.try_update(|s| s.step(action)).unwrap_or(false)
            })
            .await;
            if !submitted {
                log::debug!("Analyze ignored: a request is already in flight");
                return;
            }

            match state.try_with_untracked(|s| (s.prediction.clone(), s.error.clone())) {
                Some((Some(prediction), _)) => log::info!(
                    "✅ {} ({})",
                    prediction.label,
                    prediction.confidence_percent()
                ),
                Some((_, Some(error))) => log::warn!("❌ Analysis failed: {}", error),
                _ => {}
            }
        });
    };

    let read = state.read_only();

    view! {
        <Title text="TB Vision X-AI Analysis"/>
        <div class="analysis-page">
            <A href="/" class="back-link">"← Back to Home"</A>

            <div class="analysis-card">
                <div class="analysis-header">
                    <h1>"TB Vision X-AI Analysis"</h1>
                    <p class="subtitle">
                        "Advanced tuberculosis detection using explainable AI technology "
                        "with GradCAM and LIME visualizations"
                    </p>
                </div>

                <UploadPanel state=read on_select=on_select on_analyze=on_analyze/>

                {move || state.with(|s| s.error.clone()).map(|message| view! { <ErrorBanner message=message/> })}

                <Show when=move || busy.get()>
                    <LoadingIndicator message=Signal::derive(move || state.with(|s| s.loading_message()))/>
                </Show>

                {move || {
                    state
                        .with(|s| s.prediction.clone())
                        .map(|prediction| view! { <ResultsPanel prediction=prediction/> })
                }}
            </div>

            <Footer/>
        </div>
    }
}

fn revoke_preview(url: &str) {
    if let Err(e) = Url::revoke_object_url(url) {
        log::warn!("Could not revoke preview URL {}: {:?}", url, e);
    }
}
