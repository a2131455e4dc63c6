//! TB Vision X-AI - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend that uploads a chest X-ray to a remote
//! prediction service and shows the classification together with its
//! GradCAM and LIME explanations.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App (Router)                          │
//! ├──────────────────────────────┬──────────────────────────────┤
//! │  /          LandingPage      │  /analysis   AnalysisPage     │
//! │  ├── Hero                    │  ├── UploadPanel              │
//! │  ├── feature cards           │  ├── ErrorBanner              │
//! │  └── Footer                  │  ├── LoadingIndicator         │
//! │                              │  ├── ResultsPanel             │
//! │                              │  └── Footer                   │
//! └──────────────────────────────┴──────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`config`] - Endpoint, model id, loading messages
//! - [`types`] - Prediction and error types
//! - [`state`] - Analysis view state and transitions
//! - [`components`] - UI components
//! - [`services`] - Prediction service client

use leptos::*;
use leptos_meta::provide_meta_context;
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod state;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::*;

pub use types::{AnalysisError, AnalysisResult, Prediction};

pub use state::{Action, AnalysisState};

pub use components::*;

pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// Install logging and mount the application on `<body>`.
pub fn run() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 TB Vision X-AI - Starting Leptos App");

    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=LandingPage/>
                    <Route path="/analysis" view=AnalysisPage/>
                    <Route path="/*any" view=LandingPage/>
                </Routes>
            </main>
        </Router>
    }
}
