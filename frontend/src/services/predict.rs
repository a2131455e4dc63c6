//! HTTP client for the remote prediction service.
//!
//! The image is posted as multipart form data; the answer body is read as
//! text and handed to [`interpret_response`], which owns every rule about
//! what counts as a result and what counts as an error.

use gloo_net::http::Request;
use serde_json::Value;
use wasm_bindgen::JsValue;
use web_sys::{File, FormData};

use crate::config::{predict_url, IMAGE_FIELD, MODEL_FIELD, MODEL_ID};
use crate::types::{AnalysisError, AnalysisResult, Prediction};

/// Send one X-ray to the prediction service.
pub async fn predict(file: File) -> AnalysisResult<Prediction> {
    let form_data = FormData::new().map_err(js_error)?;
    form_data
        .append_with_blob(IMAGE_FIELD, &file)
        .map_err(js_error)?;
    form_data
        .append_with_str(MODEL_FIELD, MODEL_ID)
        .map_err(js_error)?;

    let url = predict_url();
    log::info!("📤 Sending {} ({} bytes) to {}", file.name(), file.size(), url);

    let response = Request::post(url)
        .body(form_data)
        .map_err(|e| AnalysisError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| AnalysisError::Network(e.to_string()))?;

    let status = response.status();
    log::info!("📥 Prediction service answered {}", status);

    let body = match response.text().await {
        Ok(body) => body,
        Err(e) => {
            log::warn!("Could not read response body: {}", e);
            String::new()
        }
    };

    interpret_response(status, &body)
}

/// Turn a status code and raw body into a prediction or a user-facing error.
pub fn interpret_response(status: u16, body: &str) -> AnalysisResult<Prediction> {
    let parsed = serde_json::from_str::<Value>(body).ok();

    if !(200..300).contains(&status) {
        return Err(match parsed.as_ref().and_then(error_message) {
            Some(message) => AnalysisError::Server(message),
            None => AnalysisError::Status(status),
        });
    }

    let data = parsed.ok_or(AnalysisError::InvalidPayload)?;

    if let Some(message) = error_message(&data) {
        return Err(AnalysisError::Rejected(message));
    }

    let has_score = data.get("prediction").is_some_and(Value::is_number);
    let has_label = data
        .get("class")
        .and_then(Value::as_str)
        .is_some_and(|label| !label.is_empty());
    if !has_score || !has_label {
        return Err(AnalysisError::InvalidPayload);
    }

    serde_json::from_value(data).map_err(|e| {
        log::warn!("Prediction payload rejected: {}", e);
        AnalysisError::InvalidPayload
    })
}

/// The `error` field of a body, when it holds something worth showing.
fn error_message(body: &Value) -> Option<String> {
    match body.get("error")? {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        other => Some(other.to_string()),
    }
}

fn js_error(err: JsValue) -> AnalysisError {
    AnalysisError::Network(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
}
