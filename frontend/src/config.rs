//! Application configuration.
//!
//! Centralized configuration for the TB Vision frontend.
//! Values are compiled in; the prediction endpoint can be overridden at
//! build time with the `TB_VISION_API_URL` environment variable.

/// Default prediction endpoint.
pub const DEFAULT_PREDICT_URL: &str = "https://tb-vision-x-ai-backend.onrender.com/predict";

/// Model identifier sent with every analysis request.
pub const MODEL_ID: &str = "densenet";

/// Multipart field carrying the X-ray image.
pub const IMAGE_FIELD: &str = "image";

/// Multipart field carrying the model identifier.
pub const MODEL_FIELD: &str = "model";

/// Delay between two loading messages, in milliseconds.
pub const LOADING_TICK_MS: u32 = 3_000;

/// Status messages cycled while an analysis is running.
pub const LOADING_MESSAGES: [&str; 6] = [
    "Analyzing your chest X-ray image...",
    "Processing the image for TB detection...",
    "Generating GradCAM visualization for better understanding...",
    "Creating LIME explanation to highlight important regions...",
    "Almost there! Finalizing the results...",
    "Preparing detailed analysis report...",
];

/// Project source repository.
pub const REPOSITORY_URL: &str = "https://github.com/SharitVaishnav/TB-Vision-X-AI.git";

/// Research paper, served next to the application.
pub const REPORT_PATH: &str = "/TB-Detection_report.pdf";

/// Prefix turning a base64 PNG payload into an `<img src>`.
pub const PNG_DATA_URL_PREFIX: &str = "data:image/png;base64,";

/// Prediction endpoint, honoring the build-time override.
pub fn predict_url() -> &'static str {
    match option_env!("TB_VISION_API_URL") {
        Some(url) if !url.is_empty() => url,
        _ => DEFAULT_PREDICT_URL,
    }
}
