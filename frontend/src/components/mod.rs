//! UI Components for the TB Vision application.
//!
//! # Pages
//! - [`LandingPage`] - Static presentation, entry into the analysis
//! - [`AnalysisPage`] - Upload, submission and results
//!
//! # Layout Components
//! - [`Hero`] - Title and tagline
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`UploadPanel`] - Image picker, preview and analyze button
//! - [`ErrorBanner`] - Failure message
//! - [`LoadingIndicator`] - Rotating status messages
//! - [`ResultsPanel`] - Classification and GradCAM / LIME images

mod analysis;
mod footer;
mod hero;
mod landing;
mod loading;
mod results;
mod upload;

pub use analysis::*;
pub use footer::*;
pub use hero::*;
pub use landing::*;
pub use loading::*;
pub use results::*;
pub use upload::*;
