// src/ui/mod.rs
pub mod page;
pub mod symptoms;
pub mod widgets;
