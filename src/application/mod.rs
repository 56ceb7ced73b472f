/// Service traits
pub mod interfaces;
/// Request payloads, query builders, and typed response models
pub mod models;
/// Service implementations
pub mod services;
