//! Configuration, request/response models and field validation.

pub mod config;
pub mod models;
pub mod validation;
