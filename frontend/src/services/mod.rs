//! External services.
//!
//! - [`predict`] - X-ray upload to the remote prediction service

pub mod predict;

pub use predict::*;
