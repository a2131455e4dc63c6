//! Common types used across the frontend application.
//!
//! # Categories
//!
//! - **API Types** - Prediction service response
//! - **Error Types** - Analysis failures shown to the user

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::PNG_DATA_URL_PREFIX;

// =============================================================================
// API Types
// =============================================================================

/// Successful answer of the prediction service.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// Confidence score in `[0, 1]`
    pub prediction: f64,
    /// Class label, e.g. "TB Positive"
    #[serde(rename = "class")]
    pub label: String,
    /// GradCAM heat-map, base64 PNG
    #[serde(default)]
    pub gradcam: Option<String>,
    /// LIME segment overlay, base64 PNG
    #[serde(default)]
    pub lime: Option<String>,
}

impl Prediction {
    /// Confidence as a percentage with two decimals, e.g. `87.00%`.
    ///
    /// Ties round up (`12.125` shows as `12.13%`).
    pub fn confidence_percent(&self) -> String {
        let percent = self.prediction * 100.0;
        format!("{:.2}%", (percent * 100.0).round() / 100.0)
    }

    /// `<img src>` for the GradCAM visualization, if one was returned.
    pub fn gradcam_src(&self) -> Option<String> {
        image_src(self.gradcam.as_deref())
    }

    /// `<img src>` for the LIME explanation, if one was returned.
    pub fn lime_src(&self) -> Option<String> {
        image_src(self.lime.as_deref())
    }
}

fn image_src(payload: Option<&str>) -> Option<String> {
    payload
        .filter(|b64| !b64.is_empty())
        .map(|b64| format!("{}{}", PNG_DATA_URL_PREFIX, b64))
}

// =============================================================================
// Error Types
// =============================================================================

/// Why an analysis did not produce a result.
///
/// The `Display` output is exactly the message shown to the user.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum AnalysisError {
    /// Non-2xx answer without a usable error message.
    #[error("HTTP error! status: {0}")]
    Status(u16),

    /// Non-2xx answer carrying an error message.
    #[error("{0}")]
    Server(String),

    /// 2xx answer flagged as an error by the service.
    #[error("{0}")]
    Rejected(String),

    /// 2xx answer that is not a usable prediction.
    #[error("Invalid prediction data received from server")]
    InvalidPayload,

    /// Request could not be built or never completed.
    #[error("{0}")]
    Network(String),
}

/// Result type alias for analysis operations.
pub type AnalysisResult<T> = Result<T, AnalysisError>;
