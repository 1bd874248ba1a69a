//! HTTP handlers for the ai service.

pub mod health;
pub mod relay;
