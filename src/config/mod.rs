// src/config/mod.rs
pub mod fields;
pub mod settings;

// Re-export commonly used types
pub use fields::{FieldKind, FieldSpec, FormSchema};
pub use fields::{DIABETES_FORM, HEART_FORM, PREGNANCY_FORM, SYMPTOMS_FORM};
pub use settings::{Settings, SettingsError};
