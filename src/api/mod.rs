// src/api/mod.rs
pub mod client;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use client::ApiClient;
pub use error::RequestError;
pub use models::{AnalysisResult, PredictionResult};
