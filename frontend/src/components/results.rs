//! Classification summary and explanation images.

use leptos::*;

use crate::types::Prediction;

#[component]
pub fn ResultsPanel(prediction: Prediction) -> impl IntoView {
    let gradcam = prediction.gradcam_src();
    let lime = prediction.lime_src();
    let confidence = prediction.confidence_percent();

    view! {
        <section class="results-section">
            <h2>"Analysis Results"</h2>

            <div class="prediction-summary">
                <div>
                    <h3>"Prediction: " <span class="prediction-class">{prediction.label}</span></h3>
                    <p>"Confidence: " <span class="prediction-confidence">{confidence}</span></p>
                </div>
                <span class="ai-badge">"AI Powered"</span>
            </div>

            <div class="visualizations">
                {gradcam.map(|src| view! {
                    <ExplanationCard
                        title="GradCAM Visualization"
                        caption="Heat map showing which regions the AI focused on for decision making"
                        accent="gradcam"
                        src=src
                    />
                })}
                {lime.map(|src| view! {
                    <ExplanationCard
                        title="LIME Explanation"
                        caption="Local interpretable model explaining the prediction with highlighted segments"
                        accent="lime"
                        src=src
                    />
                })}
            </div>
        </section>
    }
}

#[component]
fn ExplanationCard(
    title: &'static str,
    caption: &'static str,
    /// CSS modifier for the card
    accent: &'static str,
    /// `data:` URL of the image
    src: String,
) -> impl IntoView {
    view! {
        <div class=format!("explanation-card {}", accent)>
            <h3>{title}</h3>
            <p class="explanation-caption">{caption}</p>
            <img src=src alt=title class="explanation-image"/>
        </div>
    }
}
